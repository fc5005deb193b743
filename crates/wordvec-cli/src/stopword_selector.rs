use std::sync::Arc;

use wordvec::stopwords::{
    BuiltinStopwords,
    CachedStopwordSource,
    DirectoryStopwords,
    StopwordSourceHandle,
};

/// Stopword source arg group.
#[derive(clap::Args, Debug)]
pub struct StopwordArgs {
    /// Directory of stopword lists, one file per language;
    /// defaults to the built-in English list.
    #[arg(long, default_value = None)]
    stopwords_dir: Option<String>,
}

impl StopwordArgs {
    /// Build the selected stopword source.
    pub fn source(&self) -> StopwordSourceHandle {
        match &self.stopwords_dir {
            Some(dir) => {
                log::debug!("stopwords from {dir}");
                Arc::new(CachedStopwordSource::new(DirectoryStopwords::new(dir)))
            }
            None => Arc::new(BuiltinStopwords),
        }
    }
}
