use super::catalog::Catalog;

// ---------------------------------------------------------------------------
// Per-station channel picks
// ---------------------------------------------------------------------------

/// Tri-state summary of a station's channel picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    PartiallyChecked,
    Unchecked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPick {
    pub code: String,
    pub selected: bool,
}

/// The picks for one station record, channels in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSelection {
    pub station: String,
    pub channels: Vec<ChannelPick>,
}

impl StationSelection {
    pub fn state(&self) -> CheckState {
        let picked = self.channels.iter().filter(|c| c.selected).count();
        if picked == 0 {
            CheckState::Unchecked
        } else if picked == self.channels.len() {
            CheckState::Checked
        } else {
            CheckState::PartiallyChecked
        }
    }

    fn selected(&self) -> impl Iterator<Item = &str> {
        self.channels
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.code.as_str())
    }
}

/// Which channels of which stations the user wants converted and plotted.
///
/// Stations are addressed by their index in the catalog, since a station
/// name can appear in more than one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelSelection {
    stations: Vec<StationSelection>,
}

impl ChannelSelection {
    /// Initialise from a catalog, pre-selecting channels whose code ends
    /// with `default_suffix` (the vertical component, usually `Z`).
    pub fn from_catalog(catalog: &Catalog, default_suffix: &str) -> Self {
        let stations = catalog
            .stations
            .iter()
            .map(|record| StationSelection {
                station: record.station_name.clone(),
                channels: record
                    .channels
                    .iter()
                    .map(|c| ChannelPick {
                        code: c.channel_code.clone(),
                        selected: !default_suffix.is_empty()
                            && c.channel_code.ends_with(default_suffix),
                    })
                    .collect(),
            })
            .collect();
        ChannelSelection { stations }
    }

    pub fn stations(&self) -> &[StationSelection] {
        &self.stations
    }

    /// Flip one channel. Returns false when the station or channel is unknown.
    pub fn toggle(&mut self, station: usize, channel: &str) -> bool {
        let Some(pick) = self
            .stations
            .get_mut(station)
            .and_then(|s| s.channels.iter_mut().find(|c| c.code == channel))
        else {
            return false;
        };
        pick.selected = !pick.selected;
        true
    }

    pub fn select_all(&mut self, station: usize) {
        self.set_station(station, true);
    }

    pub fn select_none(&mut self, station: usize) {
        self.set_station(station, false);
    }

    fn set_station(&mut self, station: usize, selected: bool) {
        if let Some(s) = self.stations.get_mut(station) {
            for pick in &mut s.channels {
                pick.selected = selected;
            }
        }
    }

    pub fn station_state(&self, station: usize) -> Option<CheckState> {
        self.stations.get(station).map(StationSelection::state)
    }

    /// Distinct selected channel codes in first-seen order.
    pub fn selected_channels(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for code in self.stations.iter().flat_map(|s| s.selected()) {
            if !out.iter().any(|c| c == code) {
                out.push(code.to_string());
            }
        }
        out
    }

    /// Waveform file names that belong to a selected station/channel pair:
    /// the name contains both the station name and the channel code.
    pub fn matching_files<'a, S: AsRef<str>>(&self, names: &'a [S]) -> Vec<&'a str> {
        let mut out = Vec::new();
        for station in &self.stations {
            for code in station.selected() {
                out.extend(
                    names
                        .iter()
                        .map(|n| -> &'a str { n.as_ref() })
                        .filter(|n| n.contains(station.station.as_str()) && n.contains(code)),
                );
            }
        }
        out
    }
}
