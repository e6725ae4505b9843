use neonfolio_data::PROFILE;

use crate::{dom::El, error::Error};

/// Round profile placeholder inside a rotating gradient ring, with a
/// pulsing online dot. All motion is CSS.
pub(crate) fn avatar() -> Result<El, Error> {
    Ok(El::new("div")?
        .class("avatar")
        .child(El::new("div")?.class("avatar-ring"))
        .child(
            El::new("div")?
                .class("avatar-face")
                .attr("title", PROFILE.name)
                .child(El::new("div")?.class("avatar-scanlines scanlines"))
                .child(El::new("span")?.class("avatar-initials").text(PROFILE.initials))
                .child(El::new("div")?.class("avatar-sheen")),
        )
        .child(El::new("span")?.class("avatar-status")))
}
