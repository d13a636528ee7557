/// Constants used by the tokenizer collaborator.
pub mod tokenizer {
    /// Pretrained tokenizer identifier loaded once at startup.
    pub const PRETRAINED_ID: &str = "Milos/slovak-gpt-j-405M";
    /// Marker prefix prepended to chunk text to signal the domain label.
    ///
    /// Tokenizes to a short fixed prefix so the downstream model can learn
    /// the poem-style signal.
    pub const POEM_MARKER: &str = "[POH] ";
}

/// Constants used by corpus layout and workflow prerequisites.
pub mod corpus {
    /// Default root data directory.
    pub const DATA_DIR: &str = "data";
    /// Subdirectory holding pre-chunked poem text.
    pub const CHUNKED_DIR: &str = "chunked";
    /// Subdirectory the full-length books archive is extracted into.
    pub const FULL_LENGTH_DIR: &str = "full_length";
    /// Log message used when stray root-level files are skipped.
    pub const SKIP_ROOT_FILE_MSG: &str = "skipping file outside any book directory";
}

/// Constants used by the deterministic train/test partitioner.
pub mod partition {
    /// Fixed shuffle seed; train/test membership is a pure function of the
    /// sorted item list and this constant.
    pub const SHUFFLE_SEED: u64 = 42;
    /// Fraction of items assigned to the train split (split index is
    /// `floor(TRAIN_FRACTION * N)`).
    pub const TRAIN_FRACTION: f64 = 0.8;
    /// Output archive filename for the fine-tuning dataset.
    pub const ARCHIVE_FILENAME: &str = "poh_dataset.zip";
    /// Archive entry label for the train split.
    pub const TRAIN_LABEL: &str = "train";
    /// Archive entry label for the test split.
    pub const TEST_LABEL: &str = "test";
}

/// Constants used by the long-poem threshold filter.
pub mod threshold {
    /// Token count above which a poem is considered "long" (strictly greater).
    pub const LONG_POEM_TOKENS: usize = 1024;
    /// Output CSV filename for long-poem records.
    pub const CSV_FILENAME: &str = "long_poems.csv";
    /// Header row for the long-poem CSV.
    pub const CSV_HEADER: &str = "book,poem,token_count";
}

/// Constants used by the remote books archive fetch.
pub mod fetch {
    /// Fixed URL of the full-length books archive.
    pub const BOOKS_ARCHIVE_URL: &str =
        "https://raw.githubusercontent.com/patrikflorek/hviezdoslav/master/books_txt.zip";
    /// Local cache filename for the downloaded archive.
    pub const BOOKS_ARCHIVE_FILENAME: &str = "books_txt.zip";
    /// Upper bound on the downloaded archive size.
    pub const MAX_DOWNLOAD_BYTES: u64 = 512 * 1024 * 1024;
}

/// Constants used by statistics reports and histogram artifacts.
pub mod report {
    /// Number of items shown in top/bottom rankings.
    pub const RANKING_SIZE: usize = 5;
    /// Histogram artifact for chunk token counts.
    pub const CHUNKED_TOKEN_HIST: &str = "chunked_token_count_hist.svg";
    /// Histogram artifact for full-length word counts.
    pub const FULL_LENGTH_WORD_HIST: &str = "full_length_word_count_hist.svg";
    /// Histogram artifact for full-length token counts.
    pub const FULL_LENGTH_TOKEN_HIST: &str = "full_length_token_count_hist.svg";
    /// Default number of histogram bins.
    pub const HISTOGRAM_BINS: usize = 10;
}
