use serde::{Deserialize, Serialize};

/// Task area colour; red marks a hard task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaColor {
    Blue,
    Red,
}

impl AreaColor {
    pub fn from_draw(blue: bool) -> Self {
        if blue {
            AreaColor::Blue
        } else {
            AreaColor::Red
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            AreaColor::Blue => (0, 0, 255),
            AreaColor::Red => (255, 0, 0),
        }
    }
}

/// Which side of the client/server experiment a generated file drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Client,
    Server,
}

impl Variant {
    pub fn label(self) -> &'static str {
        match self {
            Variant::Client => "CLIENT",
            Variant::Server => "SERVER",
        }
    }

    /// Closing line of the loop-function tag selecting this variant's mode.
    pub fn mode_marker(self) -> String {
        format!(
            "\t\t\tmode=\"{}\">  <!-- The label can be set to \"CLIENT\" or \"SERVER\" to achieve the desired behaviour-->\n",
            self.label()
        )
    }
}
