use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The order in which the upstream returns roster entries. This is the
/// upstream's native join order, not the role rank.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, EnumString, Display)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
// strum casing matches clap's kebab-case value names; the wire casing is
// serde's.
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "PascalCase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}
