//! Assets compiled into the firmware image

use badge_core::assets::EmbeddedAssets;
use badge_core::config::{BITCOIN_TEXT, CONTACT_BITMAP, CONTACT_TEXT};

static ENTRIES: [(&str, &[u8]); 3] = [
    (CONTACT_BITMAP, include_bytes!("../assets/smile.bmp")),
    (CONTACT_TEXT, include_bytes!("../assets/contact.txt")),
    (BITCOIN_TEXT, include_bytes!("../assets/bitcoin.txt")),
];

pub fn store() -> EmbeddedAssets {
    EmbeddedAssets::new(&ENTRIES)
}
