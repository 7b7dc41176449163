//! SSH identification line parsing (RFC 4253 Section 4.2).
//!
//! Both peers open a connection by sending a one-line identification string:
//!
//! ```text
//! SSH-protoversion-softwareversion SP comments CR LF
//! ```
//!
//! Example: `SSH-2.0-OpenSSH_8.9 Ubuntu-3ubuntu0.1`
//!
//! A passive decoder records the protocol and software version fields and
//! otherwise treats the line as opaque: no syntax is enforced on the
//! protocol version, and non-UTF-8 bytes are captured lossily rather than
//! rejected. Hostile banners must never crash the decoder.
//!
//! # Example
//!
//! ```rust
//! use flowlens_proto::ssh::Banner;
//!
//! let (banner, trailing) = Banner::parse(b"SSH-2.0-OpenSSH_8.9\r\n").unwrap();
//! assert_eq!(banner.protocol_version(), "2.0");
//! assert_eq!(banner.software_version(), "OpenSSH_8.9");
//! assert_eq!(trailing, 2); // the CR LF terminator
//! ```

use crate::ssh::error::DecodeError;

/// Maximum length of an SSH identification line, including the terminator
/// (RFC 4253 Section 4.2).
pub const MAX_BANNER_LEN: usize = 255;

/// A parsed SSH identification line.
///
/// Produced by [`Banner::parse`] from a buffer known to contain at least one
/// line terminator; the driver copies the fields into the per-direction
/// state exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    /// Protocol version (e.g., "2.0")
    protocol_version: String,
    /// Software version (e.g., "OpenSSH_8.9"); may be empty
    software_version: String,
}

impl Banner {
    /// Parses one SSH identification line located at the start of `input`.
    ///
    /// The caller must have established that `input` contains at least one
    /// `\r` or `\n`; without a full line the banner cannot be judged.
    ///
    /// The software-version token ends at the first space, else the first
    /// `\r`, else the first `\n`, else the end of the buffer. A single
    /// trailing `\r` on the token is stripped. Comment text after the token
    /// is not consumed.
    ///
    /// # Returns
    ///
    /// The parsed banner and the number of unconsumed trailing bytes
    /// (comments and/or terminator characters), so the caller can continue
    /// decoding from that offset.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::MalformedBanner`] if `input` does not start with
    ///   `SSH-`, or no second `-` delimits the protocol version.
    /// - [`DecodeError::OversizeBanner`] if `input` is longer than
    ///   [`MAX_BANNER_LEN`] bytes.
    /// - [`DecodeError::ResourceExhausted`] if a field copy cannot be
    ///   allocated.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flowlens_proto::ssh::Banner;
    ///
    /// let (banner, trailing) = Banner::parse(b"SSH-2.0-MySSHClient-0.5.1\n").unwrap();
    /// assert_eq!(banner.software_version(), "MySSHClient-0.5.1");
    /// assert_eq!(trailing, 1);
    /// ```
    pub fn parse(input: &[u8]) -> Result<(Self, usize), DecodeError> {
        // Strings starting with anything but SSH- are not version lines,
        // even when a terminator is present.
        if input.len() < 4 || &input[..4] != b"SSH-" {
            return Err(DecodeError::MalformedBanner);
        }
        if input.len() > MAX_BANNER_LEN {
            return Err(DecodeError::OversizeBanner);
        }

        let rest = &input[4..];

        // The protocol version runs up to the next '-'. A bare "SSH-<text>"
        // with no second dash is malformed, never "need more bytes".
        let proto_end = rest
            .iter()
            .position(|&b| b == b'-')
            .ok_or(DecodeError::MalformedBanner)?;
        let protocol_version = copy_field(&rest[..proto_end])?;

        let software = &rest[proto_end + 1..];
        if software.is_empty() {
            // No software field at all; the banner is still fully parsed.
            return Ok((
                Self {
                    protocol_version,
                    software_version: String::new(),
                },
                0,
            ));
        }

        // The software token ends at the first space, else the first CR,
        // else the first LF, else the end of the buffer.
        let token_end = software
            .iter()
            .position(|&b| b == b' ')
            .or_else(|| software.iter().position(|&b| b == b'\r'))
            .or_else(|| software.iter().position(|&b| b == b'\n'))
            .unwrap_or(software.len());

        let mut token = &software[..token_end];
        if let [head @ .., b'\r'] = token {
            token = head;
        }
        let software_version = copy_field(token)?;

        let trailing = software.len() - token_end;
        Ok((
            Self {
                protocol_version,
                software_version,
            },
            trailing,
        ))
    }

    /// Returns the protocol version field (e.g., "2.0").
    pub fn protocol_version(&self) -> &str {
        &self.protocol_version
    }

    /// Returns the software version field (e.g., "OpenSSH_8.9").
    ///
    /// Empty if the banner supplied no software field.
    pub fn software_version(&self) -> &str {
        &self.software_version
    }

    /// Splits the banner into its two owned fields.
    pub(crate) fn into_parts(self) -> (String, String) {
        (self.protocol_version, self.software_version)
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SSH-{}-{}", self.protocol_version, self.software_version)
    }
}

/// Copies a banner field, reserving memory fallibly and replacing invalid
/// UTF-8 rather than rejecting it.
fn copy_field(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut out = String::new();
    out.try_reserve_exact(bytes.len())
        .map_err(|_| DecodeError::ResourceExhausted)?;
    out.push_str(&String::from_utf8_lossy(bytes));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_parse() {
        let (banner, trailing) = Banner::parse(b"SSH-2.0-MySSHClient-0.5.1\n").unwrap();
        assert_eq!(banner.protocol_version(), "2.0");
        assert_eq!(banner.software_version(), "MySSHClient-0.5.1");
        assert_eq!(trailing, 1);
    }

    #[test]
    fn test_banner_parse_crlf() {
        let (banner, trailing) = Banner::parse(b"SSH-2.0-MySSHClient-0.5.1\r\n").unwrap();
        assert_eq!(banner.software_version(), "MySSHClient-0.5.1");
        assert_eq!(trailing, 2);
    }

    #[test]
    fn test_banner_parse_comments() {
        let input = b"SSH-2.0-MySSHClient-0.5.1 some comments...\r\n";
        let (banner, trailing) = Banner::parse(input).unwrap();
        assert_eq!(banner.protocol_version(), "2.0");
        assert_eq!(banner.software_version(), "MySSHClient-0.5.1");
        // Comment text and the terminator are left for the caller.
        assert_eq!(trailing, " some comments...\r\n".len());
    }

    #[test]
    fn test_banner_parse_legacy_protocol() {
        let (banner, _) = Banner::parse(b"SSH-1.99-Cisco-1.25\r\n").unwrap();
        assert_eq!(banner.protocol_version(), "1.99");
        assert_eq!(banner.software_version(), "Cisco-1.25");
    }

    #[test]
    fn test_banner_parse_empty_software() {
        let (banner, trailing) = Banner::parse(b"SSH-2.0-").unwrap();
        assert_eq!(banner.protocol_version(), "2.0");
        assert_eq!(banner.software_version(), "");
        assert_eq!(trailing, 0);
    }

    #[test]
    fn test_banner_parse_missing_prefix() {
        let result = Banner::parse(b"HTTP/1.1 200 OK\r\n");
        assert_eq!(result.unwrap_err(), DecodeError::MalformedBanner);
    }

    #[test]
    fn test_banner_parse_short_input() {
        let result = Banner::parse(b"SS\n");
        assert_eq!(result.unwrap_err(), DecodeError::MalformedBanner);
    }

    #[test]
    fn test_banner_parse_no_second_dash() {
        // "SSH-2.0 some comments...": prefix present but no delimiter for
        // the protocol version. Malformed, never "need more bytes".
        let result = Banner::parse(b"SSH-2.0 some comments...\n");
        assert_eq!(result.unwrap_err(), DecodeError::MalformedBanner);
    }

    #[test]
    fn test_banner_parse_oversize() {
        let mut line = b"SSH-2.0-".to_vec();
        line.extend(std::iter::repeat(b'A').take(300));
        line.push(b'\n');
        let result = Banner::parse(&line);
        assert_eq!(result.unwrap_err(), DecodeError::OversizeBanner);
    }

    #[test]
    fn test_banner_parse_max_len_accepted() {
        // Exactly 255 bytes including the terminator is still valid.
        let mut line = b"SSH-2.0-".to_vec();
        line.extend(std::iter::repeat(b'A').take(MAX_BANNER_LEN - line.len() - 2));
        line.extend_from_slice(b"\r\n");
        assert_eq!(line.len(), MAX_BANNER_LEN);
        let (banner, trailing) = Banner::parse(&line).unwrap();
        assert_eq!(banner.software_version().len(), MAX_BANNER_LEN - 10);
        assert_eq!(trailing, 2);
    }

    #[test]
    fn test_banner_parse_non_utf8() {
        let (banner, _) = Banner::parse(b"SSH-2.0-bad\xffver\r\n").unwrap();
        assert_eq!(banner.software_version(), "bad\u{fffd}ver");
    }

    #[test]
    fn test_banner_display() {
        let (banner, _) = Banner::parse(b"SSH-2.0-OpenSSH_8.9\r\n").unwrap();
        assert_eq!(banner.to_string(), "SSH-2.0-OpenSSH_8.9");
    }
}
