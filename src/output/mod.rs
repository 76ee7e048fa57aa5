pub mod formatter;

pub use formatter::{
    format_age, format_breakdown, format_history, format_question, format_question_list,
    format_ranked_table, format_report, format_score, format_tsv, should_use_colors,
};
