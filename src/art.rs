/// Banner printed once when the shell starts.
pub fn welcome_message(name: &str) -> String {
    let title = format!("  {} v{}  ", name, env!("CARGO_PKG_VERSION"));
    let border = "=".repeat(title.len());
    format!(
        "{}\n{}\n{}\nType .help to list commands.",
        border, title, border
    )
}
