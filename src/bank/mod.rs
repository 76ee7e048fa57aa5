pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{
    builtin_bank_files, load_bank_file, load_builtin, load_question_bank, parse_bank_str,
    resolve_bank_paths, BankValidationError,
};
pub use types::{BankFile, FieldWeights, Question, QuestionBank};
pub use validation::{check_bank_version, validate_banks};
