/// Widget text after typing `ch` at the end of what is currently shown.
pub fn append_keystroke(display: &str, ch: char) -> String {
    let mut raw = String::with_capacity(display.len() + ch.len_utf8());
    raw.push_str(display);
    raw.push(ch);
    raw
}

pub fn describe_key(ch: char) -> String {
    if ch.is_whitespace() {
        format!("{:?}", ch)
    } else {
        ch.to_string()
    }
}
