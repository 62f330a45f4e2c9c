/// Direction of a call as shown by the icon column of the HTML view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Unknown,
}

impl CallDirection {
    /// Classify a switch call-type code.
    ///
    /// The code set is open; only the codes the HTML view draws an icon for are
    /// recognised here, everything else maps to [`CallDirection::Unknown`].
    pub fn from_call_type(call_type: &str) -> Self {
        match call_type {
            "IN" => CallDirection::Incoming,
            "TLC" | "TLD" | "LOC" => CallDirection::Outgoing,
            _ => CallDirection::Unknown,
        }
    }
}

/// One call-detail record parsed from a switch output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub call_type: String,
    pub extension: String,
    pub trunk_id: String,
    pub dialed_digits: String,
    /// Empty when the switch did not report a DID number
    pub did: String,
    /// `HH:MM` as printed by the switch
    pub start_time: String,
    /// Normalized `H:MM:SS`
    pub duration: String,
    /// `$DD.DD` as printed by the switch
    pub cost: String,
    /// Empty when no account code was entered
    pub account: String,
    pub star: bool,
}

impl CallRecord {
    pub fn direction(&self) -> CallDirection {
        CallDirection::from_call_type(&self.call_type)
    }
}
