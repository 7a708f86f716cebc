//! Options validation.
//!
//! Validation never blocks a load or a save; callers log the result.
//! A pattern that fails here fails the consolidation that compiles it.


use crate::schema::FuseOptions;
use tabfuse_common::ConfigError;

/// Run all validations on the options, collecting all errors.
pub fn validate(options: &FuseOptions) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_exclude_pattern(&mut errors, options);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// The pattern only matters when exclusion is on and it is non-empty.
fn validate_exclude_pattern(errors: &mut Vec<String>, options: &FuseOptions) {
    if !options.exclusion_active() {
        return;
    }
    if let Err(e) = fancy_regex::Regex::new(&options.exclude_pattern) {
        errors.push(format!("excludePattern: {e}"));
    }
}
