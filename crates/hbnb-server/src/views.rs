//! HTML pages

use hbnb_core::State;

/// Page listing `states` in the order given.
pub fn states_list(states: &[State]) -> String {
    let items: String = states
        .iter()
        .map(|state| {
            format!(
                "            <li>{}: <b>{}</b></li>\n",
                escape(&state.base.id),
                escape(&state.name)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE HTML>
<html lang="en">
    <head>
        <title>HBNB</title>
    </head>
    <body>
        <h1>States</h1>
        <ul>
{}        </ul>
    </body>
</html>
"#,
        items
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
