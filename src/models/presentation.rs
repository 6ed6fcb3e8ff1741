/// Slide position of the shared pitch deck.
///
/// Slides are numbered from 1 to `slide_count`. The current slide is clamped
/// to that range: moving past either end is a no-op.
#[derive(Debug, Clone)]
pub struct Presentation {
    slide_count: u32,
    current: u32,
}

impl Presentation {
    /// A deck of `slide_count` slides positioned on the first one.
    /// A count of zero is raised to one so the deck always has a current slide.
    pub fn new(slide_count: u32) -> Self {
        Self {
            slide_count: slide_count.max(1),
            current: 1,
        }
    }

    pub fn slide_count(&self) -> u32 {
        self.slide_count
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn contains(&self, slide: u32) -> bool {
        (1..=self.slide_count).contains(&slide)
    }

    /// Move to the next slide unless already on the last one. Returns the new position.
    pub fn advance(&mut self) -> u32 {
        if self.current < self.slide_count {
            self.current += 1;
        }
        self.current
    }

    /// Move to the previous slide unless already on the first one. Returns the new position.
    pub fn retreat(&mut self) -> u32 {
        if self.current > 1 {
            self.current -= 1;
        }
        self.current
    }
}

/// Static URL of a slide image: `Folie{N}.PNG` under `/static/png`.
pub fn image_url(slide: u32) -> String {
    format!("/static/png/Folie{slide}.PNG")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_slide() {
        let deck = Presentation::new(12);
        assert_eq!(deck.current(), 1);
        assert_eq!(deck.slide_count(), 12);
    }

    #[test]
    fn zero_slides_becomes_one() {
        let mut deck = Presentation::new(0);
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.advance(), 1);
        assert_eq!(deck.retreat(), 1);
    }

    #[test]
    fn advance_stops_at_last_slide() {
        let mut deck = Presentation::new(4);
        let positions: Vec<u32> = (0..5).map(|_| deck.advance()).collect();
        assert_eq!(positions, vec![2, 3, 4, 4, 4]);
    }

    #[test]
    fn retreat_stops_at_first_slide() {
        let mut deck = Presentation::new(4);
        for _ in 0..5 {
            deck.advance();
        }
        for _ in 0..6 {
            deck.retreat();
        }
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn mixed_moves_stay_in_bounds() {
        let mut deck = Presentation::new(3);
        // zig-zag covering both ends: + advance, - retreat
        for step in "+++-+----+".chars() {
            let pos = if step == '+' {
                deck.advance()
            } else {
                deck.retreat()
            };
            assert!(deck.contains(pos), "position {pos} left the deck");
        }
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn contains_checks_both_ends() {
        let deck = Presentation::new(4);
        assert!(!deck.contains(0));
        assert!(deck.contains(1));
        assert!(deck.contains(4));
        assert!(!deck.contains(5));
    }

    #[test]
    fn image_url_follows_folie_convention() {
        assert_eq!(image_url(7), "/static/png/Folie7.PNG");
    }
}
