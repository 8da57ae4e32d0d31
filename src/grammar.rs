use lazy_static::lazy_static;

lazy_static! {
    /// CHAR = <any US-ASCII character (octets 0 - 127)>
    static ref CHAR: [bool; 256] = {
        let mut bytes = [false; 256];

        for i in 0..128 {
            bytes[i] = true;
        }

        bytes
    };

    /// CTL = <any US-ASCII control character
    ///         (octets 0 - 31) and DEL (127)>
    static ref CTL: [bool; 256] = {
        let mut bytes = [false; 256];

        for i in 0..32 {
            bytes[i] = true;
        }

        bytes[127] = true;
        bytes
    };

    /// separators = "(" | ")" | "<" | ">" | "@"
    ///               | "," | ";" | ":" | "\" | <">
    ///               | "/" | "[" | "]" | "?" | "="
    ///               | "{" | "}" | SP | HT
    static ref SEPARATOR: [bool; 256] = {
        let mut result = [false; 256];
        let separators = "()<>@,;:\\\"/[]?={} \t";

        for s in separators.chars() {
            result[s as usize] = true;
        }

        result
    };

    /// token = 1*<any CHAR except CTLs or separators>
    static ref TOKEN_CHAR: [bool; 256] = {
        let mut result = [false; 256];

        for i in 0..256 {
            result[i] = CHAR[i] && !(CTL[i] || SEPARATOR[i]);
        }

        result
    };

    /// field-vchar = VCHAR / obs-text
    /// VCHAR = %x21-7E, obs-text = %x80-FF
    static ref FIELD_VCHAR: [bool; 256] = {
        let mut result = [false; 256];

        for i in 0x21..0x7F {
            result[i] = true;
        }

        for i in 0x80..0x100 {
            result[i] = true;
        }

        result
    };
}

#[inline]
pub fn is_token_char(byte: u8) -> bool {
    TOKEN_CHAR[byte as usize]
}

/// A header field-name: a non-empty token.
#[inline]
pub fn is_token(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }

    for byte in bytes {
        if !is_token_char(*byte) {
            return false;
        }
    }

    true
}

#[inline]
pub fn is_field_vchar(byte: u8) -> bool {
    FIELD_VCHAR[byte as usize]
}

/// field-value = *( field-vchar / SP / HTAB )
#[inline]
pub fn is_field_value(bytes: &[u8]) -> bool {
    for byte in bytes {
        let b = *byte;
        let is_legal = is_field_vchar(b) || is_space(b) || is_horizontal_tab(b);

        if !is_legal {
            return false;
        }
    }

    true
}

#[inline]
pub fn is_space(byte: u8) -> bool {
    byte == 32
}

#[inline]
pub fn is_horizontal_tab(byte: u8) -> bool {
    byte == 9
}
