// src/config/consts.rs

// Net config
pub const BASE_DOC_LINK: &str = "https://developer.android.com/reference";
pub const DOC_HOST: &str = "developer.android.com";
pub const BASE_SOURCE_LINK: &str = "https://android.googlesource.com";
pub const HTTP_TIMEOUT_SECS: u64 = 30;
pub const MAX_REDIRECT_HOPS: usize = 1;

// Picked at random per request
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_6) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.6 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64; rv:129.0) Gecko/20100101 Firefox/129.0",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:130.0) Gecko/20100101 Firefox/130.0",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/127.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36 Edg/128.0.0.0",
];

// Class tables on the reference index pages
pub const LINK_COL: &str = "td.jd-linkcol";
pub const DESC_COL: &str = "td.jd-descrcol";
pub const ATTR_ADDED: &str = "data-version-added";
pub const ATTR_DEPRECATED: &str = "data-version-deprecated";

// Source links
pub const SOURCE_SUFFIX: &str = ".java";
pub const GENERATED_SUFFIX: char = 'R'; // android.R, com.example.R, ...

// Input / output
pub const DEFAULT_LIBRARIES_FILE: &str = "libraries.csv";
pub const DEFAULT_MAPPINGS_FILE: &str = "source_mapping.csv";
pub const DEFAULT_OUT_FILE: &str = "classes_index.json";
pub const TABLE_SEP: char = ',';

/// Used when no library table is given and none sits in the working directory.
pub const DEFAULT_LIBRARIES: &[(&str, &str)] = &[
    ("Android Platform", "/classes"),
    ("AndroidX", "/androidx/classes"),
    ("Kotlin AndroidX", "/kotlin/androidx/classes"),
];
