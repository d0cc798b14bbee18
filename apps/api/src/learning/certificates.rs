use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certificate {
    pub id: u32,
    pub title: &'static str,
    pub provider: &'static str,
    pub year: &'static str,
    pub tag: &'static str,
    /// `#` until a real certificate file is linked.
    pub url: &'static str,
}

impl Certificate {
    pub fn has_file(&self) -> bool {
        self.url != "#"
    }
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        id: 1,
        title: "Java Full Stack Program",
        provider: "LiveTech",
        year: "2025",
        tag: "Core + Real Projects",
        url: "#",
    },
    Certificate {
        id: 2,
        title: "DSA Internship Certificate",
        provider: "College / Internship",
        year: "2024",
        tag: "Problem Solving",
        url: "#",
    },
    Certificate {
        id: 3,
        title: "Frontend (React + Next.js)",
        provider: "Self Project Track",
        year: "2025",
        tag: "Modern Web",
        url: "#",
    },
];

/// A position in the certificate carousel. Indices wrap in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    total: usize,
}

impl Carousel {
    /// An empty carousel behaves as a single slot.
    pub fn new(index: usize, total: usize) -> Self {
        let total = total.max(1);
        Self {
            index: index % total,
            total,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.total)
    }

    pub fn prev(self) -> Self {
        Self::new(self.index + self.total - 1, self.total)
    }

    /// 1-based "n/total" label.
    pub fn position(&self) -> String {
        format!("{}/{}", self.index + 1, self.total)
    }
}

#[derive(Debug, Serialize)]
pub struct CarouselView {
    pub current: &'static Certificate,
    pub has_file: bool,
    pub index: usize,
    pub prev_index: usize,
    pub next_index: usize,
    pub position: String,
    pub total: usize,
}

pub fn carousel_view(index: usize) -> CarouselView {
    let carousel = Carousel::new(index, CERTIFICATES.len());
    CarouselView {
        current: &CERTIFICATES[carousel.index()],
        has_file: CERTIFICATES[carousel.index()].has_file(),
        index: carousel.index(),
        prev_index: carousel.prev().index(),
        next_index: carousel.next().index(),
        position: carousel.position(),
        total: CERTIFICATES.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps_to_start() {
        let c = Carousel::new(2, 3);
        assert_eq!(c.next().index(), 0);
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let c = Carousel::new(0, 3);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.prev().position(), "3/3");
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let view = carousel_view(4);
        assert_eq!(view.index, 1);
        assert_eq!(view.current.title, "DSA Internship Certificate");
        assert_eq!(view.prev_index, 0);
        assert_eq!(view.next_index, 2);
    }

    #[test]
    fn test_placeholder_urls_have_no_file() {
        assert!(CERTIFICATES.iter().all(|c| !c.has_file()));
    }
}
