pub mod file;
pub mod formatter;

pub use file::save_result;
pub use formatter::{
    format_evaluation_detail, format_json, format_metric, format_ranked_table, format_tsv,
    score_bar, should_use_colors, ScoredStartup,
};
