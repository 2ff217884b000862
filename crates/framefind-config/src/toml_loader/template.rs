//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# framefind configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[find]
# Keep the current text selection when a find session is stopped
# without an explicit choice.
# keep_selection_on_stop = false

[shortcuts]
# Ask the host window to ignore its menu accelerators while the
# embedded page has focus (so copy/paste reaches the page).
# suppress_while_focused = true

[host]
# queue_capacity = 64    # 1-4096

[window]
# title = "framefind"
# width = 1024           # 200-8192
# height = 768           # 200-8192
# devtools = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
