//! Default ticker universe: 250 large US listings by market cap.

pub const DEFAULT_TICKERS: &[&str] = &[
    "AAPL", "MSFT", "GOOGL", "AMZN", "NVDA", "META", "TSLA", "BRK-B", "LLY", "V",
    "JPM", "UNH", "XOM", "MA", "JNJ", "PG", "COST", "HD", "ABBV", "WMT",
    "NFLX", "BAC", "CRM", "CVX", "MRK", "KO", "AMD", "PEP", "ORCL", "TMO",
    "ADBE", "WFC", "MCD", "CSCO", "ACN", "IBM", "GE", "ABT", "DHR", "CAT",
    "NOW", "DIS", "VZ", "INTC", "INTU", "CMCSA", "TXN", "QCOM", "PFE", "AMGN",
    "PM", "GS", "AMAT", "ISRG", "RTX", "BKNG", "T", "HON", "SPGI", "NEE",
    "LOW", "MS", "BLK", "UNP", "SYK", "AXP", "VRTX", "ELV", "SCHW", "LMT",
    "MDT", "PANW", "DE", "BMY", "GILD", "ADP", "PLD", "LRCX", "CB", "C",
    "MMC", "ADI", "REGN", "KLAC", "MDLZ", "SBUX", "ETN", "FI", "CI", "SO",
    "MO", "SHW", "ZTS", "DUK", "CME", "CL", "ICE", "BSX", "SNPS", "CDNS",
    "EOG", "PGR", "ITW", "NOC", "SLB", "USB", "EQIX", "MU", "WM", "BA",
    "PYPL", "APD", "BDX", "MCO", "AON", "CMG", "TJX", "PNC", "COP", "FDX",
    "TGT", "MMM", "GD", "EMR", "NSC", "APH", "ORLY", "PSX", "HCA", "NXPI",
    "MPC", "TT", "CTAS", "VLO", "ECL", "MSI", "AFL", "NEM", "CARR", "AIG",
    "AJG", "PSA", "PCAR", "KDP", "OXY", "WELL", "GM", "HLT", "AZO", "TFC",
    "SRE", "AEP", "MCHP", "D", "MAR", "MET", "PAYX", "F", "NUE", "CCI",
    "KMB", "SPG", "FTNT", "AMP", "ROST", "O", "PRU", "EXC", "DXCM", "JCI",
    "HES", "ODFL", "GIS", "PCG", "RSG", "BK", "KMI", "IDXX", "ALL", "KR",
    "A", "FAST", "CTVA", "EW", "OTIS", "YUM", "GWW", "LHX", "XEL", "MSCI",
    "DD", "VRSK", "EA", "GEHC", "CMI", "PPG", "EXR", "IQV", "HIG", "CTSH",
    "VICI", "MNST", "ED", "ON", "EIX", "ACGL", "HPQ", "VMC", "ROP", "MLM",
    "CBRE", "DLR", "DOW", "WEC", "STZ", "CPRT", "AWK", "RCL", "ROK", "KEYS",
    "ANSS", "IR", "DHI", "FTV", "LEN", "WAB", "TSCO", "FANG", "AVB", "IRM",
    "EFX", "GLW", "TRGP", "PWR", "CHD", "WTW", "EBAY", "ZBH", "EQR", "HPE",
    "DECK", "MTD", "FITB", "WY", "DOV", "CSGP", "TTWO", "BR", "HAL", "ULTA",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_universe_is_unique() {
        let unique: HashSet<&str> = DEFAULT_TICKERS.iter().copied().collect();
        assert_eq!(DEFAULT_TICKERS.len(), 250);
        assert_eq!(unique.len(), DEFAULT_TICKERS.len());
        assert_eq!(DEFAULT_TICKERS.first(), Some(&"AAPL"));
    }
}
