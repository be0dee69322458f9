use anyhow::{anyhow, bail};
use clap::{Parser, ValueEnum};
use core::num::NonZeroUsize;
use stuffer_core::StreamConfig;

/// Runtime configuration for the `stuffer-server` binary.
///
/// These settings control where the server listens, how large each generated
/// chunk is and how many chunks may queue up behind a slow client. All values
/// are parsed from CLI arguments or environment variables.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "stuffer-server",
    version,
    about = "An HTTP endpoint that streams ?bytes=N random bytes"
)]
pub struct CliArgs {
    /// Address to listen on.
    ///
    /// Environment variable: `SERVER_ADDR`
    #[arg(long, env = "SERVER_ADDR", default_value_t = String::from("0.0.0.0:9395"))]
    pub server_addr: String,

    /// Number of random bytes generated and written per chunk.
    ///
    /// Peak memory per request is a small multiple of this value regardless of
    /// the requested size. Larger chunks trade memory for fewer writes.
    ///
    /// Environment variable: `CHUNK_SIZE`
    #[arg(long, env = "CHUNK_SIZE", default_value_t = 1024 * 1024)]
    pub chunk_size: usize,

    /// Number of generated chunks allowed to queue between the generator and
    /// the client connection.
    ///
    /// Lower values increase backpressure responsiveness; higher values allow
    /// deeper pipelining at the cost of `chunk_size` bytes each.
    ///
    /// Environment variable: `STREAM_BUFFER_SIZE`
    #[arg(long, env = "STREAM_BUFFER_SIZE", default_value_t = 2)]
    pub stream_buffer_size: usize,

    /// Largest byte count a single request may ask for. Unlimited when unset.
    ///
    /// Environment variable: `MAX_BYTES`
    #[arg(long, env = "MAX_BYTES")]
    pub max_bytes: Option<u64>,

    /// Console log output format.
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub server_addr: String,
    pub stream: StreamConfig,
    pub stream_buffer_size: usize,
    pub max_bytes: Option<u64>,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let chunk_size = NonZeroUsize::new(args.chunk_size)
            .ok_or_else(|| anyhow!("CHUNK_SIZE must be greater than 0"))?;

        if args.stream_buffer_size == 0 {
            bail!("STREAM_BUFFER_SIZE must be greater than 0");
        }

        Ok(Self {
            server_addr: args.server_addr,
            stream: StreamConfig::new(chunk_size),
            stream_buffer_size: args.stream_buffer_size,
            max_bytes: args.max_bytes,
            log_format: args.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<ServerConfig> {
        let argv = core::iter::once("stuffer-server").chain(args.iter().copied());
        ServerConfig::try_from(CliArgs::try_parse_from(argv)?)
    }

    #[test]
    fn explicit_values_are_carried_over() {
        let config = parse(&[
            "--server-addr",
            "127.0.0.1:8080",
            "--chunk-size",
            "8192",
            "--stream-buffer-size",
            "4",
            "--max-bytes",
            "1000",
            "--log-format",
            "json",
        ])
        .expect("valid config");

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.stream.chunk_size(), 8192);
        assert_eq!(config.stream_buffer_size, 4);
        assert_eq!(config.max_bytes, Some(1000));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn zero_chunk_size_is_rejected() {
        let err = parse(&["--chunk-size", "0"]).expect_err("zero chunk size");
        assert!(err.to_string().contains("CHUNK_SIZE"));
    }

    #[test]
    fn zero_stream_buffer_is_rejected() {
        let err = parse(&["--stream-buffer-size", "0"]).expect_err("zero buffer");
        assert!(err.to_string().contains("STREAM_BUFFER_SIZE"));
    }

    #[test]
    fn negative_chunk_size_fails_to_parse() {
        assert!(parse(&["--chunk-size", "-1"]).is_err());
    }
}
