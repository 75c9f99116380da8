//! Input for the `rdseed` conversion utility.
//!
//! rdseed is driven through its interactive prompts; a request is the text
//! piped to its stdin. Running it, and managing the directory it writes SAC
//! files into, is left to the caller.

/// One SAC extraction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RdseedRequest {
    /// SEED volume to read.
    pub seed_file: String,
    /// Channel codes to extract; empty means all.
    pub channels: Vec<String>,
    /// `YYYY,DDD,HH:MM:SS.ffff`
    pub start: String,
    /// `YYYY,DDD,HH:MM:SS.ffff`
    pub end: String,
}

impl RdseedRequest {
    pub fn new(
        seed_file: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        RdseedRequest {
            seed_file: seed_file.into(),
            channels: Vec::new(),
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn with_channels<I, S>(mut self, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channels = channels.into_iter().map(Into::into).collect();
        self
    }

    /// Answers to rdseed's prompts, in order: input file, then defaults up to
    /// the channel list, defaults up to the start and end times, defaults,
    /// then `Quit`.
    pub fn script(&self) -> String {
        format!(
            "{}\n\n\n\n\n\n{}\n\n\n\n\n\n\n\n{}\n{}\n\n\nQuit\n",
            self.seed_file,
            self.channels.join(" "),
            self.start,
            self.end
        )
    }
}

/// Arguments that make rdseed print the channel summary listing.
pub fn summary_args(seed_file: &str) -> [&str; 3] {
    ["-c", "-f", seed_file]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_layout() {
        let req = RdseedRequest::new(
            "data.seed",
            "2011,060,00:00:00.0000",
            "2011,060,01:00:00.0000",
        )
        .with_channels(["BHZ", "BHE"]);
        assert_eq!(
            req.script(),
            "data.seed\n\n\n\n\n\nBHZ BHE\n\n\n\n\n\n\n\n\
             2011,060,00:00:00.0000\n2011,060,01:00:00.0000\n\n\nQuit\n"
        );
    }

    #[test]
    fn empty_channel_list_leaves_prompt_blank() {
        let req = RdseedRequest::new("x.seed", "a", "b");
        assert!(req.script().starts_with("x.seed\n\n\n\n\n\n\n"));
    }

    #[test]
    fn summary_mode() {
        assert_eq!(summary_args("x.seed"), ["-c", "-f", "x.seed"]);
    }
}
