use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::{Formatter, PrettyFormatter};
use std::io;

// Field order is the serialized key order and must stay alphabetical.

#[derive(Serialize)]
struct PemSecret<'a> {
    private_key_pem: &'a str,
    user: &'a str,
}

#[derive(Serialize)]
struct Pkcs8Secret<'a> {
    private_key_pkcs8: &'a str,
    user: &'a str,
}

/// JSON document carrying the PKCS#1 private key for `user`.
///
/// Keys are sorted, indented by two spaces and every character outside
/// printable ASCII is written as a `\uXXXX` escape.
pub fn render_secret_json(user: &str, private_key_pem: &str) -> String {
    to_ascii_pretty_json(&PemSecret {
        private_key_pem,
        user,
    })
}

/// JSON document carrying the PKCS#8 private key. `user` is always the key name.
pub fn render_pkcs8_json(key_name: &str, private_key_pkcs8_pem: &str) -> String {
    to_ascii_pretty_json(&Pkcs8Secret {
        private_key_pkcs8: private_key_pkcs8_pem,
        user: key_name,
    })
}

fn to_ascii_pretty_json<T: Serialize>(value: &T) -> String {
    let mut buf = Vec::with_capacity(256);
    let mut serializer = Serializer::with_formatter(&mut buf, AsciiPrettyFormatter::default());
    // Only borrowed string fields are serialized, into memory.
    value
        .serialize(&mut serializer)
        .expect("serializing string fields into a Vec cannot fail");
    String::from_utf8(buf).expect("ASCII formatter output is valid UTF-8")
}

/// Two-space pretty printing that escapes DEL and everything above it as
/// UTF-16 `\uXXXX` units, so surrogate pairs are used outside the BMP.
#[derive(Default)]
struct AsciiPrettyFormatter {
    inner: PrettyFormatter<'static>,
}

impl Formatter for AsciiPrettyFormatter {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if (ch as u32) < 0x7f {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}
