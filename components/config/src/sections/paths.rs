use std::path::PathBuf;

use crate::util;

section! {
    #[serde(default)]
    pub struct Paths {
        /// Where to write logfiles to. Automatically rotated daily.
        ///
        /// Logs only go to stderr when unset.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub log_dir: Option<PathBuf> = None => "RADIX_LOG_DIR" | util::parse_path,
    }
}
