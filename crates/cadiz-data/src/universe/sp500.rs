//! S&P 500 universe with display names and GICS sector classifications.

use crate::universe::gics::GicsSector;
use std::collections::HashMap;

/// S&P 500 constituent with display name and GICS sector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    /// Stock symbol.
    pub symbol: String,
    /// Company display name.
    pub name: String,
    /// GICS sector.
    pub sector: GicsSector,
}

impl Constituent {
    /// Create a new constituent.
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, sector: GicsSector) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector,
        }
    }
}

/// S&P 500 universe.
#[derive(Debug, Clone)]
pub struct SP500Universe {
    constituents: Vec<Constituent>,
    by_symbol: HashMap<String, usize>,
}

impl SP500Universe {
    /// Create a new S&P 500 universe with default constituents.
    pub fn new() -> Self {
        Self::from_constituents(Self::default_constituents())
    }

    /// Create a universe from an explicit constituent list.
    ///
    /// Later duplicates of a symbol are ignored.
    pub fn from_constituents(constituents: Vec<Constituent>) -> Self {
        let mut by_symbol = HashMap::with_capacity(constituents.len());
        let mut unique = Vec::with_capacity(constituents.len());
        for constituent in constituents {
            if by_symbol.contains_key(&constituent.symbol) {
                continue;
            }
            by_symbol.insert(constituent.symbol.clone(), unique.len());
            unique.push(constituent);
        }

        Self {
            constituents: unique,
            by_symbol,
        }
    }

    /// Get all constituents.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    /// Get all symbols.
    pub fn symbols(&self) -> Vec<String> {
        self.constituents.iter().map(|c| c.symbol.clone()).collect()
    }

    /// Look up a constituent by symbol.
    pub fn constituent(&self, symbol: &str) -> Option<&Constituent> {
        self.by_symbol.get(symbol).map(|&idx| &self.constituents[idx])
    }

    /// Get the GICS sector for a symbol.
    pub fn sector(&self, symbol: &str) -> Option<GicsSector> {
        self.constituent(symbol).map(|c| c.sector)
    }

    /// Get the display name for a symbol.
    pub fn name(&self, symbol: &str) -> Option<&str> {
        self.constituent(symbol).map(|c| c.name.as_str())
    }

    /// Get all symbols in a specific sector.
    pub fn symbols_in_sector(&self, sector: GicsSector) -> Vec<String> {
        self.constituents
            .iter()
            .filter(|c| c.sector == sector)
            .map(|c| c.symbol.clone())
            .collect()
    }

    /// Get the count of constituents per sector.
    pub fn sector_counts(&self) -> HashMap<GicsSector, usize> {
        let mut counts = HashMap::new();
        for constituent in &self.constituents {
            *counts.entry(constituent.sector).or_insert(0) += 1;
        }
        counts
    }

    /// Default S&P 500 constituents, grouped by GICS sector.
    fn default_constituents() -> Vec<Constituent> {
        use GicsSector::*;

        vec![
            // Information Technology (69)
            Constituent::new("ACN", "Accenture", InformationTechnology),
            Constituent::new("ADBE", "Adobe Inc.", InformationTechnology),
            Constituent::new("AMD", "Advanced Micro Devices", InformationTechnology),
            Constituent::new("AKAM", "Akamai Technologies", InformationTechnology),
            Constituent::new("APH", "Amphenol", InformationTechnology),
            Constituent::new("ADI", "Analog Devices", InformationTechnology),
            Constituent::new("ANSS", "Ansys", InformationTechnology),
            Constituent::new("AAPL", "Apple Inc.", InformationTechnology),
            Constituent::new("AMAT", "Applied Materials", InformationTechnology),
            Constituent::new("ANET", "Arista Networks", InformationTechnology),
            Constituent::new("ADSK", "Autodesk", InformationTechnology),
            Constituent::new("AVGO", "Broadcom Inc.", InformationTechnology),
            Constituent::new("CDNS", "Cadence Design Systems", InformationTechnology),
            Constituent::new("CDW", "CDW Corporation", InformationTechnology),
            Constituent::new("CSCO", "Cisco Systems", InformationTechnology),
            Constituent::new("CTSH", "Cognizant", InformationTechnology),
            Constituent::new("GLW", "Corning", InformationTechnology),
            Constituent::new("CRWD", "CrowdStrike", InformationTechnology),
            Constituent::new("DELL", "Dell Technologies", InformationTechnology),
            Constituent::new("ENPH", "Enphase Energy", InformationTechnology),
            Constituent::new("EPAM", "EPAM Systems", InformationTechnology),
            Constituent::new("FFIV", "F5 Inc", InformationTechnology),
            Constituent::new("FICO", "Fair Isaac", InformationTechnology),
            Constituent::new("FSLR", "First Solar", InformationTechnology),
            Constituent::new("FTNT", "Fortinet", InformationTechnology),
            Constituent::new("IT", "Gartner", InformationTechnology),
            Constituent::new("GEN", "Gen Digital", InformationTechnology),
            Constituent::new("GDDY", "GoDaddy", InformationTechnology),
            Constituent::new("HPE", "HP Enterprise", InformationTechnology),
            Constituent::new("HPQ", "HP Inc", InformationTechnology),
            Constituent::new("IBM", "IBM", InformationTechnology),
            Constituent::new("INTC", "Intel Corp.", InformationTechnology),
            Constituent::new("INTU", "Intuit", InformationTechnology),
            Constituent::new("JBL", "Jabil", InformationTechnology),
            Constituent::new("JNPR", "Juniper Networks", InformationTechnology),
            Constituent::new("KEYS", "Keysight Technologies", InformationTechnology),
            Constituent::new("KLAC", "KLA Corporation", InformationTechnology),
            Constituent::new("LRCX", "Lam Research", InformationTechnology),
            Constituent::new("MCHP", "Microchip Technology", InformationTechnology),
            Constituent::new("MU", "Micron Technology", InformationTechnology),
            Constituent::new("MSFT", "Microsoft Corp.", InformationTechnology),
            Constituent::new("MPWR", "Monolithic Power", InformationTechnology),
            Constituent::new("MSI", "Motorola Solutions", InformationTechnology),
            Constituent::new("NTAP", "NetApp", InformationTechnology),
            Constituent::new("NVDA", "NVIDIA Corp.", InformationTechnology),
            Constituent::new("NXPI", "NXP Semiconductors", InformationTechnology),
            Constituent::new("ON", "ON Semiconductor", InformationTechnology),
            Constituent::new("ORCL", "Oracle Corp.", InformationTechnology),
            Constituent::new("PLTR", "Palantir Technologies", InformationTechnology),
            Constituent::new("PANW", "Palo Alto Networks", InformationTechnology),
            Constituent::new("PTC", "PTC Inc", InformationTechnology),
            Constituent::new("QCOM", "Qualcomm", InformationTechnology),
            Constituent::new("ROP", "Roper Technologies", InformationTechnology),
            Constituent::new("CRM", "Salesforce Inc.", InformationTechnology),
            Constituent::new("STX", "Seagate Technology", InformationTechnology),
            Constituent::new("NOW", "ServiceNow", InformationTechnology),
            Constituent::new("SWKS", "Skyworks Solutions", InformationTechnology),
            Constituent::new("SMCI", "Supermicro", InformationTechnology),
            Constituent::new("SNPS", "Synopsys", InformationTechnology),
            Constituent::new("TEL", "TE Connectivity", InformationTechnology),
            Constituent::new("TDY", "Teledyne Technologies", InformationTechnology),
            Constituent::new("TER", "Teradyne", InformationTechnology),
            Constituent::new("TXN", "Texas Instruments", InformationTechnology),
            Constituent::new("TRMB", "Trimble", InformationTechnology),
            Constituent::new("TYL", "Tyler Technologies", InformationTechnology),
            Constituent::new("VRSN", "Verisign", InformationTechnology),
            Constituent::new("WDC", "Western Digital", InformationTechnology),
            Constituent::new("WDAY", "Workday", InformationTechnology),
            Constituent::new("ZBRA", "Zebra Technologies", InformationTechnology),
            // Health Care (60)
            Constituent::new("ABT", "Abbott Laboratories", HealthCare),
            Constituent::new("ABBV", "AbbVie Inc.", HealthCare),
            Constituent::new("A", "Agilent Technologies", HealthCare),
            Constituent::new("ALGN", "Align Technology", HealthCare),
            Constituent::new("AMGN", "Amgen Inc.", HealthCare),
            Constituent::new("BAX", "Baxter International", HealthCare),
            Constituent::new("BDX", "Becton Dickinson", HealthCare),
            Constituent::new("TECH", "Bio-Techne", HealthCare),
            Constituent::new("BIIB", "Biogen", HealthCare),
            Constituent::new("BSX", "Boston Scientific", HealthCare),
            Constituent::new("BMY", "Bristol-Myers Squibb", HealthCare),
            Constituent::new("CAH", "Cardinal Health", HealthCare),
            Constituent::new("COR", "Cencora", HealthCare),
            Constituent::new("CNC", "Centene", HealthCare),
            Constituent::new("CRL", "Charles River Labs", HealthCare),
            Constituent::new("CI", "Cigna", HealthCare),
            Constituent::new("COO", "Cooper Companies", HealthCare),
            Constituent::new("CVS", "CVS Health", HealthCare),
            Constituent::new("DHR", "Danaher Corp.", HealthCare),
            Constituent::new("DVA", "DaVita", HealthCare),
            Constituent::new("DXCM", "Dexcom", HealthCare),
            Constituent::new("EW", "Edwards Lifesciences", HealthCare),
            Constituent::new("ELV", "Elevance Health", HealthCare),
            Constituent::new("GEHC", "GE HealthCare", HealthCare),
            Constituent::new("GILD", "Gilead Sciences", HealthCare),
            Constituent::new("HCA", "HCA Healthcare", HealthCare),
            Constituent::new("HSIC", "Henry Schein", HealthCare),
            Constituent::new("HOLX", "Hologic", HealthCare),
            Constituent::new("HUM", "Humana", HealthCare),
            Constituent::new("IDXX", "Idexx Laboratories", HealthCare),
            Constituent::new("INCY", "Incyte", HealthCare),
            Constituent::new("PODD", "Insulet", HealthCare),
            Constituent::new("ISRG", "Intuitive Surgical", HealthCare),
            Constituent::new("IQV", "IQVIA", HealthCare),
            Constituent::new("JNJ", "Johnson & Johnson", HealthCare),
            Constituent::new("LH", "Labcorp", HealthCare),
            Constituent::new("LLY", "Eli Lilly", HealthCare),
            Constituent::new("MCK", "McKesson", HealthCare),
            Constituent::new("MDT", "Medtronic", HealthCare),
            Constituent::new("MRK", "Merck & Co.", HealthCare),
            Constituent::new("MTD", "Mettler Toledo", HealthCare),
            Constituent::new("MRNA", "Moderna", HealthCare),
            Constituent::new("MOH", "Molina Healthcare", HealthCare),
            Constituent::new("PFE", "Pfizer Inc.", HealthCare),
            Constituent::new("DGX", "Quest Diagnostics", HealthCare),
            Constituent::new("REGN", "Regeneron", HealthCare),
            Constituent::new("RMD", "ResMed", HealthCare),
            Constituent::new("RVTY", "Revvity", HealthCare),
            Constituent::new("SOLV", "Solventum", HealthCare),
            Constituent::new("STE", "Steris", HealthCare),
            Constituent::new("SYK", "Stryker", HealthCare),
            Constituent::new("TMO", "Thermo Fisher Scientific", HealthCare),
            Constituent::new("UNH", "UnitedHealth Group", HealthCare),
            Constituent::new("UHS", "Universal Health Services", HealthCare),
            Constituent::new("VRTX", "Vertex Pharmaceuticals", HealthCare),
            Constituent::new("VTRS", "Viatris", HealthCare),
            Constituent::new("WAT", "Waters Corporation", HealthCare),
            Constituent::new("WST", "West Pharmaceutical", HealthCare),
            Constituent::new("ZBH", "Zimmer Biomet", HealthCare),
            Constituent::new("ZTS", "Zoetis", HealthCare),
            // Financials (73)
            Constituent::new("AFL", "Aflac", Financials),
            Constituent::new("ALL", "Allstate", Financials),
            Constituent::new("AXP", "American Express", Financials),
            Constituent::new("AIG", "American International Group", Financials),
            Constituent::new("AMP", "Ameriprise Financial", Financials),
            Constituent::new("AON", "Aon", Financials),
            Constituent::new("APO", "Apollo Global Management", Financials),
            Constituent::new("ACGL", "Arch Capital Group", Financials),
            Constituent::new("AJG", "Arthur J. Gallagher", Financials),
            Constituent::new("AIZ", "Assurant", Financials),
            Constituent::new("BAC", "Bank of America", Financials),
            Constituent::new("BRK-B", "Berkshire Hathaway", Financials),
            Constituent::new("BLK", "BlackRock", Financials),
            Constituent::new("BX", "Blackstone", Financials),
            Constituent::new("BK", "BNY Mellon", Financials),
            Constituent::new("BRO", "Brown & Brown", Financials),
            Constituent::new("COF", "Capital One", Financials),
            Constituent::new("CBOE", "Cboe Global Markets", Financials),
            Constituent::new("SCHW", "Charles Schwab", Financials),
            Constituent::new("CB", "Chubb", Financials),
            Constituent::new("CINF", "Cincinnati Financial", Financials),
            Constituent::new("C", "Citigroup Inc.", Financials),
            Constituent::new("CFG", "Citizens Financial", Financials),
            Constituent::new("CME", "CME Group", Financials),
            Constituent::new("CPAY", "Corpay", Financials),
            Constituent::new("DFS", "Discover Financial", Financials),
            Constituent::new("ERIE", "Erie Indemnity", Financials),
            Constituent::new("EG", "Everest Group", Financials),
            Constituent::new("FDS", "FactSet", Financials),
            Constituent::new("FIS", "FIS", Financials),
            Constituent::new("FITB", "Fifth Third Bancorp", Financials),
            Constituent::new("FI", "Fiserv", Financials),
            Constituent::new("BEN", "Franklin Resources", Financials),
            Constituent::new("GPN", "Global Payments", Financials),
            Constituent::new("GL", "Globe Life", Financials),
            Constituent::new("GS", "Goldman Sachs", Financials),
            Constituent::new("HIG", "Hartford Financial Services", Financials),
            Constituent::new("HBAN", "Huntington Bancshares", Financials),
            Constituent::new("ICE", "Intercontinental Exchange", Financials),
            Constituent::new("IVZ", "Invesco", Financials),
            Constituent::new("JKHY", "Jack Henry", Financials),
            Constituent::new("JPM", "JPMorgan Chase", Financials),
            Constituent::new("KEY", "KeyCorp", Financials),
            Constituent::new("KKR", "KKR & Co", Financials),
            Constituent::new("L", "Loews Corporation", Financials),
            Constituent::new("MTB", "M&T Bank", Financials),
            Constituent::new("MKTX", "MarketAxess", Financials),
            Constituent::new("MMC", "Marsh McLennan", Financials),
            Constituent::new("MA", "Mastercard", Financials),
            Constituent::new("MET", "MetLife", Financials),
            Constituent::new("MCO", "Moody's", Financials),
            Constituent::new("MS", "Morgan Stanley", Financials),
            Constituent::new("MSCI", "MSCI Inc", Financials),
            Constituent::new("NDAQ", "Nasdaq Inc", Financials),
            Constituent::new("NTRS", "Northern Trust", Financials),
            Constituent::new("PYPL", "PayPal", Financials),
            Constituent::new("PNC", "PNC Financial", Financials),
            Constituent::new("PFG", "Principal Financial", Financials),
            Constituent::new("PGR", "Progressive", Financials),
            Constituent::new("PRU", "Prudential Financial", Financials),
            Constituent::new("RJF", "Raymond James", Financials),
            Constituent::new("RF", "Regions Financial", Financials),
            Constituent::new("SPGI", "S&P Global", Financials),
            Constituent::new("STT", "State Street", Financials),
            Constituent::new("SYF", "Synchrony Financial", Financials),
            Constituent::new("TROW", "T. Rowe Price", Financials),
            Constituent::new("TRV", "Travelers", Financials),
            Constituent::new("TFC", "Truist Financial", Financials),
            Constituent::new("USB", "U.S. Bancorp", Financials),
            Constituent::new("V", "Visa Inc.", Financials),
            Constituent::new("WRB", "W.R. Berkley", Financials),
            Constituent::new("WFC", "Wells Fargo", Financials),
            Constituent::new("WTW", "Willis Towers Watson", Financials),
            // Consumer Discretionary (51)
            Constituent::new("ABNB", "Airbnb", ConsumerDiscretionary),
            Constituent::new("AMZN", "Amazon.com Inc.", ConsumerDiscretionary),
            Constituent::new("APTV", "Aptiv", ConsumerDiscretionary),
            Constituent::new("AZO", "AutoZone", ConsumerDiscretionary),
            Constituent::new("BBY", "Best Buy", ConsumerDiscretionary),
            Constituent::new("BKNG", "Booking Holdings", ConsumerDiscretionary),
            Constituent::new("CZR", "Caesars Entertainment", ConsumerDiscretionary),
            Constituent::new("KMX", "CarMax", ConsumerDiscretionary),
            Constituent::new("CCL", "Carnival", ConsumerDiscretionary),
            Constituent::new("CMG", "Chipotle Mexican Grill", ConsumerDiscretionary),
            Constituent::new("DRI", "Darden Restaurants", ConsumerDiscretionary),
            Constituent::new("DECK", "Deckers Brands", ConsumerDiscretionary),
            Constituent::new("DPZ", "Domino's", ConsumerDiscretionary),
            Constituent::new("DASH", "DoorDash", ConsumerDiscretionary),
            Constituent::new("DHI", "D.R. Horton", ConsumerDiscretionary),
            Constituent::new("EBAY", "eBay", ConsumerDiscretionary),
            Constituent::new("EXPE", "Expedia", ConsumerDiscretionary),
            Constituent::new("F", "Ford Motor Co.", ConsumerDiscretionary),
            Constituent::new("GRMN", "Garmin", ConsumerDiscretionary),
            Constituent::new("GM", "General Motors", ConsumerDiscretionary),
            Constituent::new("GPC", "Genuine Parts", ConsumerDiscretionary),
            Constituent::new("HAS", "Hasbro", ConsumerDiscretionary),
            Constituent::new("HLT", "Hilton Worldwide", ConsumerDiscretionary),
            Constituent::new("HD", "Home Depot", ConsumerDiscretionary),
            Constituent::new("LVS", "Las Vegas Sands", ConsumerDiscretionary),
            Constituent::new("LEN", "Lennar", ConsumerDiscretionary),
            Constituent::new("LKQ", "LKQ Corporation", ConsumerDiscretionary),
            Constituent::new("LOW", "Lowe's Companies", ConsumerDiscretionary),
            Constituent::new("LULU", "Lululemon", ConsumerDiscretionary),
            Constituent::new("MAR", "Marriott", ConsumerDiscretionary),
            Constituent::new("MCD", "McDonald's", ConsumerDiscretionary),
            Constituent::new("MGM", "MGM Resorts", ConsumerDiscretionary),
            Constituent::new("MHK", "Mohawk Industries", ConsumerDiscretionary),
            Constituent::new("NKE", "Nike Inc.", ConsumerDiscretionary),
            Constituent::new("NCLH", "Norwegian Cruise Line", ConsumerDiscretionary),
            Constituent::new("NVR", "NVR Inc", ConsumerDiscretionary),
            Constituent::new("ORLY", "O'Reilly Automotive", ConsumerDiscretionary),
            Constituent::new("POOL", "Pool Corporation", ConsumerDiscretionary),
            Constituent::new("PHM", "PulteGroup", ConsumerDiscretionary),
            Constituent::new("RL", "Ralph Lauren", ConsumerDiscretionary),
            Constituent::new("ROST", "Ross Stores", ConsumerDiscretionary),
            Constituent::new("RCL", "Royal Caribbean", ConsumerDiscretionary),
            Constituent::new("SBUX", "Starbucks Corp.", ConsumerDiscretionary),
            Constituent::new("TPR", "Tapestry", ConsumerDiscretionary),
            Constituent::new("TSLA", "Tesla Inc.", ConsumerDiscretionary),
            Constituent::new("TJX", "TJX Companies", ConsumerDiscretionary),
            Constituent::new("TSCO", "Tractor Supply", ConsumerDiscretionary),
            Constituent::new("ULTA", "Ulta Beauty", ConsumerDiscretionary),
            Constituent::new("WSM", "Williams-Sonoma", ConsumerDiscretionary),
            Constituent::new("WYNN", "Wynn Resorts", ConsumerDiscretionary),
            Constituent::new("YUM", "Yum! Brands", ConsumerDiscretionary),
            // Communication Services (23)
            Constituent::new("GOOGL", "Alphabet Inc. (Class A)", CommunicationServices),
            Constituent::new("GOOG", "Alphabet Inc. (Class C)", CommunicationServices),
            Constituent::new("T", "AT&T Inc.", CommunicationServices),
            Constituent::new("CHTR", "Charter Communications", CommunicationServices),
            Constituent::new("CMCSA", "Comcast Corp.", CommunicationServices),
            Constituent::new("EA", "Electronic Arts", CommunicationServices),
            Constituent::new("FOXA", "Fox Corp (A)", CommunicationServices),
            Constituent::new("FOX", "Fox Corp (B)", CommunicationServices),
            Constituent::new("IPG", "Interpublic Group", CommunicationServices),
            Constituent::new("LYV", "Live Nation", CommunicationServices),
            Constituent::new("MTCH", "Match Group", CommunicationServices),
            Constituent::new("META", "Meta Platforms", CommunicationServices),
            Constituent::new("NFLX", "Netflix Inc.", CommunicationServices),
            Constituent::new("NWSA", "News Corp (A)", CommunicationServices),
            Constituent::new("NWS", "News Corp (B)", CommunicationServices),
            Constituent::new("OMC", "Omnicom", CommunicationServices),
            Constituent::new("PARA", "Paramount Global", CommunicationServices),
            Constituent::new("TMUS", "T-Mobile US", CommunicationServices),
            Constituent::new("TTWO", "Take-Two Interactive", CommunicationServices),
            Constituent::new("TKO", "TKO Group", CommunicationServices),
            Constituent::new("VZ", "Verizon Communications", CommunicationServices),
            Constituent::new("DIS", "Walt Disney", CommunicationServices),
            Constituent::new("WBD", "Warner Bros. Discovery", CommunicationServices),
            // Industrials (78)
            Constituent::new("MMM", "3M", Industrials),
            Constituent::new("AOS", "A. O. Smith", Industrials),
            Constituent::new("ALLE", "Allegion", Industrials),
            Constituent::new("AME", "Ametek", Industrials),
            Constituent::new("ADP", "Automatic Data Processing", Industrials),
            Constituent::new("AXON", "Axon Enterprise", Industrials),
            Constituent::new("BA", "Boeing Co.", Industrials),
            Constituent::new("BR", "Broadridge Financial", Industrials),
            Constituent::new("BLDR", "Builders FirstSource", Industrials),
            Constituent::new("CHRW", "C.H. Robinson", Industrials),
            Constituent::new("CARR", "Carrier Global", Industrials),
            Constituent::new("CAT", "Caterpillar Inc.", Industrials),
            Constituent::new("CTAS", "Cintas", Industrials),
            Constituent::new("CPRT", "Copart", Industrials),
            Constituent::new("CSX", "CSX Corporation", Industrials),
            Constituent::new("CMI", "Cummins", Industrials),
            Constituent::new("DAY", "Dayforce", Industrials),
            Constituent::new("DE", "Deere & Co.", Industrials),
            Constituent::new("DAL", "Delta Air Lines", Industrials),
            Constituent::new("DOV", "Dover Corporation", Industrials),
            Constituent::new("ETN", "Eaton Corporation", Industrials),
            Constituent::new("EMR", "Emerson Electric", Industrials),
            Constituent::new("EFX", "Equifax", Industrials),
            Constituent::new("EXPD", "Expeditors International", Industrials),
            Constituent::new("FAST", "Fastenal", Industrials),
            Constituent::new("FDX", "FedEx", Industrials),
            Constituent::new("FTV", "Fortive", Industrials),
            Constituent::new("GE", "GE Aerospace", Industrials),
            Constituent::new("GEV", "GE Vernova", Industrials),
            Constituent::new("GNRC", "Generac", Industrials),
            Constituent::new("GD", "General Dynamics", Industrials),
            Constituent::new("HON", "Honeywell", Industrials),
            Constituent::new("HWM", "Howmet Aerospace", Industrials),
            Constituent::new("HUBB", "Hubbell", Industrials),
            Constituent::new("HII", "Huntington Ingalls", Industrials),
            Constituent::new("IEX", "IDEX Corporation", Industrials),
            Constituent::new("ITW", "Illinois Tool Works", Industrials),
            Constituent::new("IR", "Ingersoll Rand", Industrials),
            Constituent::new("JBHT", "J.B. Hunt", Industrials),
            Constituent::new("J", "Jacobs Solutions", Industrials),
            Constituent::new("JCI", "Johnson Controls", Industrials),
            Constituent::new("LHX", "L3Harris", Industrials),
            Constituent::new("LDOS", "Leidos", Industrials),
            Constituent::new("LII", "Lennox International", Industrials),
            Constituent::new("LMT", "Lockheed Martin", Industrials),
            Constituent::new("MAS", "Masco", Industrials),
            Constituent::new("NDSN", "Nordson", Industrials),
            Constituent::new("NSC", "Norfolk Southern", Industrials),
            Constituent::new("NOC", "Northrop Grumman", Industrials),
            Constituent::new("ODFL", "Old Dominion", Industrials),
            Constituent::new("OTIS", "Otis Worldwide", Industrials),
            Constituent::new("PCAR", "Paccar", Industrials),
            Constituent::new("PH", "Parker Hannifin", Industrials),
            Constituent::new("PAYX", "Paychex", Industrials),
            Constituent::new("PAYC", "Paycom", Industrials),
            Constituent::new("PNR", "Pentair", Industrials),
            Constituent::new("PWR", "Quanta Services", Industrials),
            Constituent::new("RTX", "RTX Corp.", Industrials),
            Constituent::new("RSG", "Republic Services", Industrials),
            Constituent::new("ROK", "Rockwell Automation", Industrials),
            Constituent::new("ROL", "Rollins", Industrials),
            Constituent::new("SNA", "Snap-on", Industrials),
            Constituent::new("LUV", "Southwest Airlines", Industrials),
            Constituent::new("SWK", "Stanley Black & Decker", Industrials),
            Constituent::new("TXT", "Textron", Industrials),
            Constituent::new("TT", "Trane Technologies", Industrials),
            Constituent::new("TDG", "TransDigm", Industrials),
            Constituent::new("UBER", "Uber", Industrials),
            Constituent::new("UNP", "Union Pacific", Industrials),
            Constituent::new("UAL", "United Airlines", Industrials),
            Constituent::new("UPS", "United Parcel Service", Industrials),
            Constituent::new("URI", "United Rentals", Industrials),
            Constituent::new("VLTO", "Veralto", Industrials),
            Constituent::new("VRSK", "Verisk Analytics", Industrials),
            Constituent::new("GWW", "W.W. Grainger", Industrials),
            Constituent::new("WAB", "Wabtec", Industrials),
            Constituent::new("WM", "Waste Management", Industrials),
            Constituent::new("XYL", "Xylem", Industrials),
            // Consumer Staples (38)
            Constituent::new("MO", "Altria Group", ConsumerStaples),
            Constituent::new("ADM", "Archer Daniels Midland", ConsumerStaples),
            Constituent::new("BF-B", "Brown-Forman", ConsumerStaples),
            Constituent::new("BG", "Bunge Global", ConsumerStaples),
            Constituent::new("CPB", "Campbell's Company", ConsumerStaples),
            Constituent::new("CHD", "Church & Dwight", ConsumerStaples),
            Constituent::new("CLX", "Clorox", ConsumerStaples),
            Constituent::new("KO", "Coca-Cola", ConsumerStaples),
            Constituent::new("CL", "Colgate-Palmolive", ConsumerStaples),
            Constituent::new("CAG", "Conagra Brands", ConsumerStaples),
            Constituent::new("STZ", "Constellation Brands", ConsumerStaples),
            Constituent::new("COST", "Costco Wholesale", ConsumerStaples),
            Constituent::new("DG", "Dollar General", ConsumerStaples),
            Constituent::new("DLTR", "Dollar Tree", ConsumerStaples),
            Constituent::new("EL", "Estee Lauder", ConsumerStaples),
            Constituent::new("GIS", "General Mills", ConsumerStaples),
            Constituent::new("HSY", "Hershey", ConsumerStaples),
            Constituent::new("HRL", "Hormel Foods", ConsumerStaples),
            Constituent::new("K", "Kellanova", ConsumerStaples),
            Constituent::new("KVUE", "Kenvue", ConsumerStaples),
            Constituent::new("KDP", "Keurig Dr Pepper", ConsumerStaples),
            Constituent::new("KMB", "Kimberly-Clark", ConsumerStaples),
            Constituent::new("KHC", "Kraft Heinz", ConsumerStaples),
            Constituent::new("KR", "Kroger", ConsumerStaples),
            Constituent::new("LW", "Lamb Weston", ConsumerStaples),
            Constituent::new("MKC", "McCormick", ConsumerStaples),
            Constituent::new("TAP", "Molson Coors", ConsumerStaples),
            Constituent::new("MDLZ", "Mondelez International", ConsumerStaples),
            Constituent::new("MNST", "Monster Beverage", ConsumerStaples),
            Constituent::new("PEP", "PepsiCo Inc.", ConsumerStaples),
            Constituent::new("PM", "Philip Morris International", ConsumerStaples),
            Constituent::new("PG", "Procter & Gamble", ConsumerStaples),
            Constituent::new("SJM", "J.M. Smucker", ConsumerStaples),
            Constituent::new("SYY", "Sysco", ConsumerStaples),
            Constituent::new("TGT", "Target", ConsumerStaples),
            Constituent::new("TSN", "Tyson Foods", ConsumerStaples),
            Constituent::new("WBA", "Walgreens", ConsumerStaples),
            Constituent::new("WMT", "Walmart Inc.", ConsumerStaples),
            // Energy (23)
            Constituent::new("APA", "APA Corporation", Energy),
            Constituent::new("BKR", "Baker Hughes", Energy),
            Constituent::new("CVX", "Chevron Corp.", Energy),
            Constituent::new("COP", "ConocoPhillips", Energy),
            Constituent::new("CTRA", "Coterra", Energy),
            Constituent::new("DVN", "Devon Energy", Energy),
            Constituent::new("FANG", "Diamondback Energy", Energy),
            Constituent::new("EOG", "EOG Resources", Energy),
            Constituent::new("EQT", "EQT Corporation", Energy),
            Constituent::new("EXE", "Expand Energy", Energy),
            Constituent::new("XOM", "Exxon Mobil", Energy),
            Constituent::new("HAL", "Halliburton", Energy),
            Constituent::new("HES", "Hess Corporation", Energy),
            Constituent::new("KMI", "Kinder Morgan", Energy),
            Constituent::new("MPC", "Marathon Petroleum", Energy),
            Constituent::new("OXY", "Occidental Petroleum", Energy),
            Constituent::new("OKE", "Oneok", Energy),
            Constituent::new("PSX", "Phillips 66", Energy),
            Constituent::new("SLB", "Schlumberger", Energy),
            Constituent::new("TRGP", "Targa Resources", Energy),
            Constituent::new("TPL", "Texas Pacific Land", Energy),
            Constituent::new("VLO", "Valero Energy", Energy),
            Constituent::new("WMB", "Williams Companies", Energy),
            // Utilities (31)
            Constituent::new("AES", "AES Corporation", Utilities),
            Constituent::new("LNT", "Alliant Energy", Utilities),
            Constituent::new("AEE", "Ameren", Utilities),
            Constituent::new("AEP", "American Electric Power", Utilities),
            Constituent::new("AWK", "American Water Works", Utilities),
            Constituent::new("ATO", "Atmos Energy", Utilities),
            Constituent::new("CNP", "CenterPoint Energy", Utilities),
            Constituent::new("CMS", "CMS Energy", Utilities),
            Constituent::new("ED", "Consolidated Edison", Utilities),
            Constituent::new("CEG", "Constellation Energy", Utilities),
            Constituent::new("D", "Dominion Energy", Utilities),
            Constituent::new("DTE", "DTE Energy", Utilities),
            Constituent::new("DUK", "Duke Energy", Utilities),
            Constituent::new("EIX", "Edison International", Utilities),
            Constituent::new("ETR", "Entergy", Utilities),
            Constituent::new("EVRG", "Evergy", Utilities),
            Constituent::new("ES", "Eversource Energy", Utilities),
            Constituent::new("EXC", "Exelon", Utilities),
            Constituent::new("FE", "FirstEnergy", Utilities),
            Constituent::new("NEE", "NextEra Energy", Utilities),
            Constituent::new("NI", "NiSource", Utilities),
            Constituent::new("NRG", "NRG Energy", Utilities),
            Constituent::new("PCG", "PG&E", Utilities),
            Constituent::new("PNW", "Pinnacle West", Utilities),
            Constituent::new("PPL", "PPL Corporation", Utilities),
            Constituent::new("PEG", "PSEG", Utilities),
            Constituent::new("SRE", "Sempra", Utilities),
            Constituent::new("SO", "Southern Company", Utilities),
            Constituent::new("VST", "Vistra", Utilities),
            Constituent::new("WEC", "WEC Energy", Utilities),
            Constituent::new("XEL", "Xcel Energy", Utilities),
            // Real Estate (31)
            Constituent::new("ARE", "Alexandria Real Estate Equities", RealEstate),
            Constituent::new("AMT", "American Tower", RealEstate),
            Constituent::new("AVB", "AvalonBay Communities", RealEstate),
            Constituent::new("BXP", "BXP Inc", RealEstate),
            Constituent::new("CPT", "Camden Property Trust", RealEstate),
            Constituent::new("CBRE", "CBRE Group", RealEstate),
            Constituent::new("CSGP", "CoStar Group", RealEstate),
            Constituent::new("CCI", "Crown Castle", RealEstate),
            Constituent::new("DLR", "Digital Realty", RealEstate),
            Constituent::new("EQIX", "Equinix", RealEstate),
            Constituent::new("EQR", "Equity Residential", RealEstate),
            Constituent::new("ESS", "Essex Property Trust", RealEstate),
            Constituent::new("EXR", "Extra Space Storage", RealEstate),
            Constituent::new("FRT", "Federal Realty", RealEstate),
            Constituent::new("DOC", "Healthpeak Properties", RealEstate),
            Constituent::new("HST", "Host Hotels & Resorts", RealEstate),
            Constituent::new("INVH", "Invitation Homes", RealEstate),
            Constituent::new("IRM", "Iron Mountain", RealEstate),
            Constituent::new("KIM", "Kimco Realty", RealEstate),
            Constituent::new("MAA", "Mid-America Apartment", RealEstate),
            Constituent::new("PLD", "Prologis", RealEstate),
            Constituent::new("PSA", "Public Storage", RealEstate),
            Constituent::new("O", "Realty Income", RealEstate),
            Constituent::new("REG", "Regency Centers", RealEstate),
            Constituent::new("SBAC", "SBA Communications", RealEstate),
            Constituent::new("SPG", "Simon Property Group", RealEstate),
            Constituent::new("UDR", "UDR Inc", RealEstate),
            Constituent::new("VTR", "Ventas", RealEstate),
            Constituent::new("VICI", "Vici Properties", RealEstate),
            Constituent::new("WELL", "Welltower", RealEstate),
            Constituent::new("WY", "Weyerhaeuser", RealEstate),
            // Materials (26)
            Constituent::new("APD", "Air Products", Materials),
            Constituent::new("ALB", "Albemarle", Materials),
            Constituent::new("AMCR", "Amcor", Materials),
            Constituent::new("AVY", "Avery Dennison", Materials),
            Constituent::new("BALL", "Ball Corporation", Materials),
            Constituent::new("CF", "CF Industries", Materials),
            Constituent::new("CTVA", "Corteva", Materials),
            Constituent::new("DOW", "Dow Inc.", Materials),
            Constituent::new("DD", "DuPont de Nemours", Materials),
            Constituent::new("EMN", "Eastman Chemical", Materials),
            Constituent::new("ECL", "Ecolab", Materials),
            Constituent::new("FCX", "Freeport-McMoRan", Materials),
            Constituent::new("IFF", "IFF", Materials),
            Constituent::new("IP", "International Paper", Materials),
            Constituent::new("LIN", "Linde plc", Materials),
            Constituent::new("LYB", "LyondellBasell", Materials),
            Constituent::new("MLM", "Martin Marietta", Materials),
            Constituent::new("MOS", "Mosaic", Materials),
            Constituent::new("NEM", "Newmont", Materials),
            Constituent::new("NUE", "Nucor", Materials),
            Constituent::new("PKG", "Packaging Corp", Materials),
            Constituent::new("PPG", "PPG Industries", Materials),
            Constituent::new("SHW", "Sherwin-Williams", Materials),
            Constituent::new("SW", "Smurfit Westrock", Materials),
            Constituent::new("STLD", "Steel Dynamics", Materials),
            Constituent::new("VMC", "Vulcan Materials", Materials),
        ]
    }
}

impl Default for SP500Universe {
    fn default() -> Self {
        Self::new()
    }
}
