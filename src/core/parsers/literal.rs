//! Go string literal unquoting.
//!
//! Both source files and template placeholders carry Go string literals:
//! interpreted strings (`"Save \"all\""`) and raw strings (`` `Save` ``).

use std::str::Chars;

use anyhow::{Result, anyhow, bail};

/// Decode a Go string literal (including its quotes) into its value.
///
/// # Examples
///
/// ```
/// use sifter::core::parsers::literal::unquote;
///
/// assert_eq!(unquote(r#""Hello\tworld""#).unwrap(), "Hello\tworld");
/// assert_eq!(unquote(r"`C:\temp`").unwrap(), r"C:\temp");
/// assert_eq!(unquote(r#""\u00e9t\xc3\xa9""#).unwrap(), "été");
/// assert!(unquote(r#""bad \q""#).is_err());
/// ```
pub fn unquote(raw: &str) -> Result<String> {
    if raw.len() >= 2 && raw.starts_with('`') && raw.ends_with('`') {
        let inner = &raw[1..raw.len() - 1];
        if inner.contains('`') {
            bail!("unexpected backtick inside raw string {}", raw);
        }
        // Carriage returns are discarded from raw strings.
        return Ok(inner.replace('\r', ""));
    }

    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unquote_interpreted(&raw[1..raw.len() - 1])
            .map_err(|e| anyhow!("invalid string literal {}: {}", raw, e));
    }

    bail!("not a quoted string: {}", raw)
}

fn unquote_interpreted(inner: &str) -> Result<String> {
    // Octal and \x escapes denote single bytes, so decode into bytes first.
    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => bail!("unescaped quote"),
            '\n' => bail!("newline in string"),
            '\\' => unescape(&mut chars, &mut bytes)?,
            _ => push_char(&mut bytes, c),
        }
    }

    String::from_utf8(bytes).map_err(|_| anyhow!("escapes produce invalid UTF-8"))
}

fn unescape(chars: &mut Chars<'_>, bytes: &mut Vec<u8>) -> Result<()> {
    let Some(c) = chars.next() else {
        bail!("trailing backslash");
    };

    match c {
        'a' => bytes.push(0x07),
        'b' => bytes.push(0x08),
        'f' => bytes.push(0x0c),
        'n' => bytes.push(b'\n'),
        'r' => bytes.push(b'\r'),
        't' => bytes.push(b'\t'),
        'v' => bytes.push(0x0b),
        '\\' => bytes.push(b'\\'),
        '"' => bytes.push(b'"'),
        '0'..='7' => {
            let mut value = digit(c, 8)?;
            for _ in 0..2 {
                value = value * 8 + next_digit(chars, 8)?;
            }
            let byte = u8::try_from(value).map_err(|_| anyhow!("octal escape out of range"))?;
            bytes.push(byte);
        }
        'x' => {
            let value = read_digits(chars, 2, 16)?;
            // Two hex digits always fit in a byte.
            bytes.push(value as u8);
        }
        'u' => push_scalar(bytes, read_digits(chars, 4, 16)?)?,
        'U' => push_scalar(bytes, read_digits(chars, 8, 16)?)?,
        other => bail!("unknown escape sequence \\{}", other),
    }
    Ok(())
}

fn push_char(bytes: &mut Vec<u8>, c: char) {
    let mut buf = [0; 4];
    bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
}

fn push_scalar(bytes: &mut Vec<u8>, value: u32) -> Result<()> {
    let c = char::from_u32(value)
        .ok_or_else(|| anyhow!("escape \\u{:x} is not a valid Unicode code point", value))?;
    push_char(bytes, c);
    Ok(())
}

fn read_digits(chars: &mut Chars<'_>, count: usize, radix: u32) -> Result<u32> {
    let mut value = 0;
    for _ in 0..count {
        value = value * radix + next_digit(chars, radix)?;
    }
    Ok(value)
}

fn next_digit(chars: &mut Chars<'_>, radix: u32) -> Result<u32> {
    let c = chars
        .next()
        .ok_or_else(|| anyhow!("escape sequence is too short"))?;
    digit(c, radix)
}

fn digit(c: char, radix: u32) -> Result<u32> {
    c.to_digit(radix)
        .ok_or_else(|| anyhow!("invalid digit {:?} in escape sequence", c))
}
