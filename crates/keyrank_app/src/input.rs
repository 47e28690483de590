//! Pure helpers for editing the form's text buffers.

pub(crate) fn push_char(current: &str, ch: char) -> String {
    let mut next = String::with_capacity(current.len() + ch.len_utf8());
    next.push_str(current);
    next.push(ch);
    next
}

pub(crate) fn pop_char(current: &str) -> String {
    let mut next = current.to_owned();
    next.pop();
    next
}
