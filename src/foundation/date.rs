use chrono::{Datelike, NaiveDate};

/// Horizontal half of the canvas holding the decorative image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSide {
    Left,
    Right,
}

impl ImageSide {
    /// Odd days put the image on the left, even days on the right.
    pub fn for_day(day: u32) -> Self {
        if day % 2 == 1 { Self::Left } else { Self::Right }
    }
}

/// Calendar date a slide is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl SlideDate {
    /// Current local date.
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    fn short_year(self) -> i32 {
        self.year.rem_euclid(100)
    }

    /// Date as printed in the title and summary line, e.g. `10/18/26`.
    pub fn display(self) -> String {
        format!("{}/{}/{}", self.month, self.day, self.short_year())
    }

    /// Slide title, e.g. `FOD 10/18/26:`.
    pub fn title(self) -> String {
        format!("FOD {}:", self.display())
    }

    /// Output file name, e.g. `FOD101826.png`.
    pub fn file_name(self) -> String {
        format!(
            "FOD{:02}{:02}{:02}.png",
            self.month,
            self.day,
            self.short_year()
        )
    }

    pub fn image_side(self) -> ImageSide {
        ImageSide::for_day(self.day)
    }
}

impl From<NaiveDate> for SlideDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}
