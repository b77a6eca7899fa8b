use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    /// Result line on stdout
    Result,
    /// Diagnostic on stderr
    Error,
}

/// Applies a consistent style to a string. Error text is styled for stderr so
/// colours follow stderr's terminal support rather than stdout's.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Result => style(text).bold(),
        StyleType::Error => style(text).for_stderr().red(),
    };
    styled.to_string()
}
