use serde::{Deserialize, Serialize};

/// Metadata of an image known to the backend gallery.
///
/// `data` holds the raw encoded bytes when they have been fetched and is
/// deliberately excluded from both serialization and equality: two records
/// describing the same image compare equal whether or not their pixel
/// payload happens to be loaded.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: i64,
    pub name: String,
    pub media_type: String,
    pub width: u32,
    pub height: u32,
    pub nb_colors: u32,
    #[serde(default)]
    pub filtered: bool,
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Image {
    /// Dimension summary in the backend's `width*height*channels` form.
    pub fn size(&self) -> String {
        format!("{}*{}*{}", self.width, self.height, self.nb_colors)
    }

    /// Gallery label; filtered copies are prefixed to tell them apart
    /// from their source image.
    pub fn display_name(&self) -> String {
        if self.filtered {
            format!("filtered_{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.media_type == other.media_type
            && self.width == other.width
            && self.height == other.height
            && self.nb_colors == other.nb_colors
            && self.filtered == other.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Image {
        Image {
            id: 3,
            name: "sunset.png".into(),
            media_type: "image/png".into(),
            width: 640,
            height: 480,
            nb_colors: 3,
            filtered: false,
            data: vec![],
        }
    }

    #[test]
    fn equality_ignores_pixel_payload() {
        let a = sample();
        let b = Image {
            data: vec![0xff; 16],
            ..sample()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_sensitive_to_metadata() {
        let a = sample();
        let b = Image {
            id: 4,
            ..sample()
        };
        assert_ne!(a, b, "differing id");

        let c = Image {
            filtered: true,
            ..sample()
        };
        assert_ne!(a, c, "differing filtered flag");
    }

    #[test]
    fn size_renders_dimensions_and_channels() {
        assert_eq!(sample().size(), "640*480*3");
    }

    #[test]
    fn filtered_images_get_a_name_prefix() {
        let mut image = sample();
        assert_eq!(image.display_name(), "sunset.png");
        image.filtered = true;
        assert_eq!(image.display_name(), "filtered_sunset.png");
    }
}
