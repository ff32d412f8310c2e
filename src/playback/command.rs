//! Player command line construction.

use std::fmt;
use std::path::Path;

use crate::config::PlaybackConfig;
use crate::media::ResolvedStream;

/// A fully built player invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerCommand {
    /// Build the streamlink invocation recording `stream` to `output`.
    pub fn build(config: &PlaybackConfig, stream: &ResolvedStream, output: &Path) -> Self {
        let mut args = vec![
            "--http-header".to_string(),
            format!("User-Agent={}", config.user_agent),
            hls_url(&stream.url),
            config.quality.clone(),
            "-o".to_string(),
            output.display().to_string(),
        ];

        if let Some(cookie) = stream.cookie() {
            args.push("--http-cookie".to_string());
            args.push(format!(
                "{}={}; Domain={}; Path=/",
                cookie.name, cookie.value, config.cookie_domain
            ));
        }

        Self {
            program: config.player.clone(),
            args,
        }
    }
}

impl fmt::Display for PlayerCommand {
    /// Shell-style rendering for `--dry-run`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Streamlink HLS URL with the CDN's `ssl=true` switch.
pub fn hls_url(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("hls://{}{}ssl=true", url, separator)
}

fn shell_quote(arg: &str) -> String {
    let plain = arg
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));

    if plain && !arg.is_empty() {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{CookieGrant, PlaybackCookie};
    use std::path::PathBuf;

    fn stream(cookie: CookieGrant) -> ResolvedStream {
        ResolvedStream {
            url: "cdn.oz.com/live/index.m3u8".into(),
            cookie,
        }
    }

    #[test]
    fn test_hls_url() {
        assert_eq!(hls_url("cdn/x.m3u8"), "hls://cdn/x.m3u8?ssl=true");
        assert_eq!(hls_url("cdn/x.m3u8?a=1"), "hls://cdn/x.m3u8?a=1&ssl=true");
    }

    #[test]
    fn test_build_with_cookie() {
        let config = PlaybackConfig::default();
        let stream = stream(CookieGrant::Issued(PlaybackCookie {
            name: "oz_session".into(),
            value: "minted".into(),
        }));
        let command = PlayerCommand::build(&config, &stream, &PathBuf::from("out/News_7.ts"));

        assert_eq!(command.program, "streamlink");
        assert_eq!(command.args[0], "--http-header");
        assert!(command.args[1].starts_with("User-Agent=Mozilla/5.0 (X11; Linux x86_64)"));
        assert_eq!(command.args[2], "hls://cdn.oz.com/live/index.m3u8?ssl=true");
        assert_eq!(command.args[3], "best");
        assert_eq!(command.args[4..6], ["-o".to_string(), "out/News_7.ts".to_string()]);
        assert_eq!(
            command.args[6..],
            [
                "--http-cookie".to_string(),
                "oz_session=minted; Domain=oz.com; Path=/".to_string()
            ]
        );
    }

    #[test]
    fn test_build_without_cookie() {
        let config = PlaybackConfig::default();
        for grant in [
            CookieGrant::NotOffered,
            CookieGrant::Unavailable("timeout".into()),
        ] {
            let command = PlayerCommand::build(&config, &stream(grant), &PathBuf::from("a.ts"));
            assert!(!command.args.iter().any(|a| a == "--http-cookie"));
        }
    }

    #[test]
    fn test_display_quotes_arguments() {
        let command = PlayerCommand {
            program: "streamlink".into(),
            args: vec!["best".into(), "-o".into(), "My File.ts".into(), "it's".into()],
        };
        assert_eq!(
            command.to_string(),
            r"streamlink best -o 'My File.ts' 'it'\''s'"
        );
    }
}
