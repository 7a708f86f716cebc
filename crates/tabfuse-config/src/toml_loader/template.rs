//! Default TOML options template with inline documentation comments.

/// Generate the default TOML options content with comments.
pub(crate) fn default_options_toml() -> String {
    r##"# TabFuse options
# Only override what you want to change -- missing keys use defaults.

# Move tabs out of panel windows.
# includePanels = false

# Move tabs out of popup windows.
# includePopups = false

# Move tabs out of app windows.
# includeApps = true

# Leave tabs whose URL matches excludePattern (a regular expression).
# An empty pattern excludes nothing.
# exclude = false
# excludePattern = "^chrome://"
"##
    .to_string()
}
