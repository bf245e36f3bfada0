//! 热门股票列表
//!
//! 固定的代码/名称清单，进程生命周期内只读。
//! 每个代码只出现一次（NFLX、ADSK 不重复列出），共 111 条

/// 热门股票 (代码, 名称)，按展示顺序排列
pub const TRENDING_SYMBOLS: &[(&str, &str)] = &[
    ("NVDA", "Nvidia Corporation"),
    ("AAPL", "Apple Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("AMZN", "Amazon.com Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("2222.SR", "Saudi Arabian Oil Company (Aramco)"),
    ("META", "Meta Platforms, Inc."),
    ("TSLA", "Tesla, Inc."),
    ("BRK.A", "Berkshire Hathaway Inc."),
    ("LLY", "Eli Lilly and Company"),
    ("AVGO", "Broadcom Inc."),
    ("TSM", "Taiwan Semiconductor Manufacturing Company Limited"),
    ("V", "Visa Inc."),
    ("JPM", "JPMorgan Chase & Co."),
    ("WMT", "Walmart Inc."),
    ("JNJ", "Johnson & Johnson"),
    ("XOM", "Exxon Mobil Corporation"),
    ("UNH", "UnitedHealth Group Incorporated"),
    ("MA", "Mastercard Incorporated"),
    ("PG", "The Procter & Gamble Company"),
    ("HD", "The Home Depot, Inc."),
    ("CVX", "Chevron Corporation"),
    ("BAC", "Bank of America Corporation"),
    ("KO", "The Coca-Cola Company"),
    ("MRK", "Merck & Co., Inc."),
    ("PEP", "PepsiCo, Inc."),
    ("ABBV", "AbbVie Inc."),
    ("TMO", "Thermo Fisher Scientific Inc."),
    ("NVO", "Novo Nordisk A/S"),
    ("ORCL", "Oracle Corporation"),
    ("ASML", "ASML Holding N.V."),
    ("CSCO", "Cisco Systems, Inc."),
    ("COST", "Costco Wholesale Corporation"),
    ("INTU", "Intuit Inc."),
    ("NFLX", "Netflix, Inc."),
    ("ADSK", "Autodesk, Inc."),
    ("ACN", "Accenture plc"),
    ("MCD", "McDonald's Corporation"),
    ("DHR", "Danaher Corporation"),
    ("LIN", "Linde plc"),
    ("NVS", "Novartis AG"),
    ("BABA", "Alibaba Group Holding Limited"),
    ("ADBE", "Adobe Inc."),
    ("PFE", "Pfizer Inc."),
    ("TM", "Toyota Motor Corporation"),
    ("DIS", "The Walt Disney Company"),
    ("CMCSA", "Comcast Corporation"),
    ("VZ", "Verizon Communications Inc."),
    ("INTC", "Intel Corporation"),
    ("NKE", "NIKE, Inc."),
    ("SAP", "SAP SE"),
    ("BHP", "BHP Group Limited"),
    ("PM", "Philip Morris International Inc."),
    ("UPS", "United Parcel Service, Inc."),
    ("RTX", "RTX Corporation"),
    ("MDT", "Medtronic plc"),
    ("AMGN", "Amgen Inc."),
    ("SHEL", "Shell plc"),
    ("T", "AT&T Inc."),
    ("HON", "Honeywell International Inc."),
    ("UNP", "Union Pacific Corporation"),
    ("BA", "The Boeing Company"),
    ("MS", "Morgan Stanley"),
    ("GS", "The Goldman Sachs Group, Inc."),
    ("IBM", "International Business Machines Corporation"),
    ("CAT", "Caterpillar Inc."),
    ("DE", "Deere & Company"),
    ("LMT", "Lockheed Martin Corporation"),
    ("CVS", "CVS Health Corporation"),
    ("BLK", "BlackRock, Inc."),
    ("NEE", "NextEra Energy, Inc."),
    ("SNY", "Sanofi"),
    ("GE", "General Electric Company"),
    ("TMUS", "T-Mobile US, Inc."),
    ("SPGI", "S&P Global Inc."),
    ("LOW", "Lowe's Companies, Inc."),
    ("AXP", "American Express Company"),
    ("BDX", "Becton, Dickinson and Company"),
    ("SYK", "Stryker Corporation"),
    ("C", "Citigroup Inc."),
    ("ADP", "Automatic Data Processing, Inc."),
    ("AMT", "American Tower Corporation"),
    ("MO", "Altria Group, Inc."),
    ("PLD", "Prologis, Inc."),
    ("CCI", "Crown Castle Inc."),
    ("GILD", "Gilead Sciences, Inc."),
    ("ANTM", "Anthem, Inc."),
    ("EL", "The Estée Lauder Companies Inc."),
    ("ISRG", "Intuitive Surgical, Inc."),
    ("ZTS", "Zoetis Inc."),
    ("MDLZ", "Mondelez International, Inc."),
    ("TGT", "Target Corporation"),
    ("DUK", "Duke Energy Corporation"),
    ("SO", "The Southern Company"),
    ("APD", "Air Products and Chemicals, Inc."),
    ("ECL", "Ecolab Inc."),
    ("CL", "Colgate-Palmolive Company"),
    ("ETN", "Eaton Corporation plc"),
    ("SHW", "The Sherwin-Williams Company"),
    ("PSA", "Public Storage"),
    ("NSC", "Norfolk Southern Corporation"),
    ("AON", "Aon plc"),
    ("FDX", "FedEx Corporation"),
    ("ITW", "Illinois Tool Works Inc."),
    ("EMR", "Emerson Electric Co."),
    ("ROST", "Ross Stores, Inc."),
    ("MAR", "Marriott International, Inc."),
    ("KMB", "Kimberly-Clark Corporation"),
    ("D", "Dominion Energy, Inc."),
    ("EXC", "Exelon Corporation"),
    ("AEP", "American Electric Power Company, Inc."),
];
