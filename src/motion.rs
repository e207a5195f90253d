//! Reveal-on-scroll and page-load animation descriptions.
//!
//! Animations are plain data: a [`RevealSpec`] is the `(trigger, before, after,
//! duration, easing)` tuple for one kind of element, and the browser does the
//! interpolation through CSS transitions. The reactive side lives in
//! `app::reveal`, which only decides the current [`RevealPhase`].

/// A visual state of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    /// Fully visible, un-offset.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn faded() -> Self {
        Pose {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn shifted(x: f64, y: f64) -> Self {
        Pose {
            opacity: 0.0,
            x,
            y,
            ..Self::REST
        }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Pose { scale, ..self }
    }

    pub const fn with_rotate(self, rotate: f64) -> Self {
        Pose { rotate, ..self }
    }

    pub fn to_style(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({}) rotate({}deg);",
            self.opacity, self.x, self.y, self.scale, self.rotate
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Power1Out,
    Power3Out,
    BackOut,
}

impl Easing {
    pub fn css(&self) -> &'static str {
        match self {
            Easing::Power1Out => "cubic-bezier(0.25, 0.46, 0.45, 0.94)",
            Easing::Power3Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

/// What happens when an element scrolls back above its start line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleActions {
    /// Play on the way in and stay shown.
    #[default]
    PlayOnce,
    /// Play on the way in, reverse when scrolled back above the start line.
    /// Leaving past the end does nothing (`play none none reverse`).
    PlayReverse,
}

/// Where an element starts its reveal, as a fraction of the viewport height
/// measured from the top, and what scrolling back does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    /// The element plays once its top edge rises above this line.
    pub start: f64,
    pub actions: ToggleActions,
}

impl Trigger {
    pub const DEFAULT: Trigger = Trigger {
        start: 0.8,
        actions: ToggleActions::PlayOnce,
    };

    pub const REVERSIBLE: Trigger = Trigger {
        start: 0.8,
        actions: ToggleActions::PlayReverse,
    };

    /// IntersectionObserver root margin that moves the viewport's bottom edge
    /// up to the start line.
    pub fn root_margin(&self) -> String {
        let inset = ((1.0 - self.start.clamp(0.0, 1.0)) * 100.0).round();
        format!("0px 0px -{inset}% 0px")
    }

    pub fn start_line(&self, viewport_height: f64) -> f64 {
        self.start * viewport_height
    }
}

/// Where an element is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPhase {
    /// No intersection measurement is available: render as-is, fully visible.
    #[default]
    Static,
    Hidden,
    Shown,
}

impl RevealPhase {
    /// Phase for one intersection observation of an element whose top edge is
    /// at `top` (viewport coordinates), ignoring what was shown before.
    pub fn from_observation(is_intersecting: bool, top: f64, start_line: f64) -> Self {
        if is_intersecting || top < start_line {
            RevealPhase::Shown
        } else {
            RevealPhase::Hidden
        }
    }

    /// Next phase after an observation. A play-once reveal stays shown once
    /// it has played; a reversing one follows the element back above the
    /// start line.
    pub fn observe(
        self,
        trigger: Trigger,
        is_intersecting: bool,
        top: f64,
        viewport_height: f64,
    ) -> Self {
        if self == RevealPhase::Shown && trigger.actions == ToggleActions::PlayOnce {
            return RevealPhase::Shown;
        }
        Self::from_observation(is_intersecting, top, trigger.start_line(viewport_height))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub trigger: Trigger,
    pub from: Pose,
    pub to: Pose,
    pub duration_ms: u32,
    pub easing: Easing,
    /// Extra delay per sibling index.
    pub stagger_ms: u32,
}

impl RevealSpec {
    pub const fn new(from: Pose, duration_ms: u32, easing: Easing) -> Self {
        RevealSpec {
            trigger: Trigger::DEFAULT,
            from,
            to: Pose::REST,
            duration_ms,
            easing,
            stagger_ms: 0,
        }
    }

    pub const fn stagger(self, stagger_ms: u32) -> Self {
        RevealSpec { stagger_ms, ..self }
    }

    pub const fn with_trigger(self, trigger: Trigger) -> Self {
        RevealSpec { trigger, ..self }
    }

    pub fn delay_ms(&self, index: usize) -> u32 {
        self.stagger_ms.saturating_mul(index as u32)
    }

    /// Time until the last of `count` staggered siblings settles.
    pub fn span_ms(&self, count: usize) -> u32 {
        self.duration_ms + self.delay_ms(count.saturating_sub(1))
    }

    pub fn transition(&self, properties: &str, delay_ms: u32) -> String {
        format!(
            "transition-property: {properties}; transition-duration: {}ms; transition-timing-function: {}; transition-delay: {delay_ms}ms;",
            self.duration_ms,
            self.easing.css()
        )
    }

    /// Inline style for the `index`-th element revealed with this spec.
    pub fn style(&self, phase: RevealPhase, index: usize) -> String {
        let pose = match phase {
            RevealPhase::Static => return String::new(),
            RevealPhase::Hidden => self.from,
            RevealPhase::Shown => self.to,
        };
        format!(
            "{} {}",
            pose.to_style(),
            self.transition("opacity, transform", self.delay_ms(index))
        )
    }

    /// Style for a progress bar fill grown by this spec.
    pub fn fill_style(&self, phase: RevealPhase, percent: u8, index: usize) -> String {
        let width = Self::fill_width(phase, percent);
        match phase {
            RevealPhase::Static => format!("width: {width};"),
            _ => format!(
                "width: {width}; {}",
                self.transition("width", self.delay_ms(index))
            ),
        }
    }

    pub fn fill_width(phase: RevealPhase, percent: u8) -> String {
        match phase {
            RevealPhase::Hidden => "0%".to_string(),
            RevealPhase::Static | RevealPhase::Shown => format!("{}%", percent.min(100)),
        }
    }
}

pub const SECTION: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 100.0), 1000, Easing::Power1Out)
        .with_trigger(Trigger::REVERSIBLE);
pub const SKILL_ITEM: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 30.0), 600, Easing::Power1Out).stagger(100);
pub const SKILL_BAR: RevealSpec = RevealSpec::new(Pose::faded(), 2000, Easing::Power3Out);
pub const EDUCATION_ITEM: RevealSpec =
    RevealSpec::new(Pose::shifted(-100.0, 0.0), 1000, Easing::Power1Out).stagger(300);
pub const EXPERIENCE_CARD: RevealSpec = RevealSpec::new(
    Pose::shifted(0.0, 100.0).with_scale(0.8),
    1000,
    Easing::BackOut,
)
.stagger(200);
pub const PROJECT_CARD: RevealSpec = RevealSpec::new(
    Pose::shifted(0.0, 100.0).with_scale(0.9),
    1000,
    Easing::Power3Out,
)
.stagger(150);
pub const TECH_ICON: RevealSpec = RevealSpec::new(
    Pose::faded().with_scale(0.0).with_rotate(-180.0),
    1000,
    Easing::BackOut,
)
.stagger(100);
pub const CONTACT_ITEM: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 50.0), 1000, Easing::Power1Out).stagger(200);
pub const HEADER: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, -100.0), 1000, Easing::Power3Out);

pub const HERO_TITLE: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 100.0), 1000, Easing::Power3Out);
pub const HERO_SUBTITLE: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 50.0), 800, Easing::Power3Out);
pub const HERO_DESCRIPTION: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 30.0), 800, Easing::Power3Out);
pub const HERO_BUTTONS: RevealSpec =
    RevealSpec::new(Pose::shifted(0.0, 20.0), 600, Easing::Power3Out);
pub const HERO_SOCIAL: RevealSpec =
    RevealSpec::new(Pose::faded().with_scale(0.0), 500, Easing::BackOut).stagger(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineStep {
    pub spec: RevealSpec,
    pub delay_ms: u32,
}

impl TimelineStep {
    /// Timelines play once on load, so hiding is instant and only the way in
    /// is transitioned.
    pub fn style(&self, phase: RevealPhase, index: usize) -> String {
        match phase {
            RevealPhase::Static => String::new(),
            RevealPhase::Hidden => self.spec.from.to_style(),
            RevealPhase::Shown => format!(
                "{} {}",
                self.spec.to.to_style(),
                self.spec
                    .transition("opacity, transform", self.delay_ms + self.spec.delay_ms(index))
            ),
        }
    }
}

/// Ordered, possibly overlapping page-load transitions.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<TimelineStep>,
    end_ms: u32,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start when the previous step ends.
    pub fn then(self, spec: RevealSpec) -> Self {
        self.overlap_group(spec, 0, 1)
    }

    /// Start `overlap_ms` before the previous step ends.
    pub fn overlap(self, spec: RevealSpec, overlap_ms: u32) -> Self {
        self.overlap_group(spec, overlap_ms, 1)
    }

    /// Like [`Timeline::overlap`] for `count` staggered siblings.
    pub fn overlap_group(mut self, spec: RevealSpec, overlap_ms: u32, count: usize) -> Self {
        let delay_ms = self.end_ms.saturating_sub(overlap_ms);
        self.end_ms = self.end_ms.max(delay_ms + spec.span_ms(count));
        self.steps.push(TimelineStep { spec, delay_ms });
        self
    }

    pub fn steps(&self) -> &[TimelineStep] {
        &self.steps
    }

    pub fn total_ms(&self) -> u32 {
        self.end_ms
    }
}

pub fn hero_timeline(social_links: usize) -> Timeline {
    Timeline::new()
        .then(HERO_TITLE)
        .overlap(HERO_SUBTITLE, 500)
        .overlap(HERO_DESCRIPTION, 300)
        .overlap(HERO_BUTTONS, 200)
        .overlap_group(HERO_SOCIAL, 200, social_links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_phase_has_no_style() {
        for spec in [SECTION, PROJECT_CARD, TECH_ICON] {
            assert!(spec.style(RevealPhase::Static, 3).is_empty());
        }
    }

    #[test]
    fn test_section_styles() {
        let hidden = SECTION.style(RevealPhase::Hidden, 0);
        assert!(hidden.starts_with("opacity: 0; transform: translate3d(0px, 100px, 0)"));
        assert!(hidden.contains("transition-duration: 1000ms"));

        let shown = SECTION.style(RevealPhase::Shown, 0);
        assert!(shown.starts_with("opacity: 1; transform: translate3d(0px, 0px, 0) scale(1)"));
        assert!(shown.contains("transition-delay: 0ms"));
    }

    #[test]
    fn test_stagger_delay() {
        let style = EDUCATION_ITEM.style(RevealPhase::Shown, 2);
        assert!(style.contains("transition-delay: 600ms"));
        assert_eq!(PROJECT_CARD.span_ms(6), 1000 + 5 * 150);
    }

    #[test]
    fn test_observation_against_start_line() {
        let line = Trigger::DEFAULT.start_line(1000.0);
        assert_eq!(line, 800.0);
        // below the fold
        let phase = RevealPhase::from_observation(false, 1200.0, line);
        assert_eq!(phase, RevealPhase::Hidden);
        // scrolled into range
        let phase = RevealPhase::from_observation(true, 700.0, line);
        assert_eq!(phase, RevealPhase::Shown);
        // scrolled past the top keeps it shown
        let phase = RevealPhase::from_observation(false, -900.0, line);
        assert_eq!(phase, RevealPhase::Shown);
        // scrolled back up past the start line
        let phase = RevealPhase::from_observation(false, 850.0, line);
        assert_eq!(phase, RevealPhase::Hidden);
    }

    #[test]
    fn test_play_once_stays_shown() {
        let viewport = 1000.0;
        let shown = RevealPhase::Hidden.observe(SKILL_BAR.trigger, true, 700.0, viewport);
        assert_eq!(shown, RevealPhase::Shown);
        let back = shown.observe(SKILL_BAR.trigger, false, 850.0, viewport);
        assert_eq!(back, RevealPhase::Shown);
        assert_eq!(RevealSpec::fill_width(back, 85), "85%");

        for spec in [SKILL_ITEM, EDUCATION_ITEM, EXPERIENCE_CARD, PROJECT_CARD, TECH_ICON] {
            let back = RevealPhase::Shown.observe(spec.trigger, false, 850.0, viewport);
            assert_eq!(back, RevealPhase::Shown);
        }
    }

    #[test]
    fn test_section_reverses() {
        let viewport = 1000.0;
        let shown = RevealPhase::Hidden.observe(SECTION.trigger, true, 700.0, viewport);
        assert_eq!(shown, RevealPhase::Shown);
        let back = shown.observe(SECTION.trigger, false, 850.0, viewport);
        assert_eq!(back, RevealPhase::Hidden);
        // scrolled past the end
        let past = shown.observe(SECTION.trigger, false, -900.0, viewport);
        assert_eq!(past, RevealPhase::Shown);
    }

    #[test]
    fn test_root_margin() {
        assert_eq!(Trigger::DEFAULT.root_margin(), "0px 0px -20% 0px");
        let full = Trigger {
            start: 1.0,
            ..Trigger::DEFAULT
        };
        assert_eq!(full.root_margin(), "0px 0px -0% 0px");
    }

    #[test]
    fn test_fill_width() {
        assert_eq!(RevealSpec::fill_width(RevealPhase::Hidden, 85), "0%");
        assert_eq!(RevealSpec::fill_width(RevealPhase::Shown, 85), "85%");
        assert_eq!(RevealSpec::fill_width(RevealPhase::Static, 85), "85%");
        assert_eq!(RevealSpec::fill_width(RevealPhase::Shown, 250), "100%");
        assert_eq!(
            SKILL_BAR.fill_style(RevealPhase::Static, 90, 0),
            "width: 90%;"
        );
    }

    #[test]
    fn test_hero_timeline_offsets() {
        let timeline = hero_timeline(3);
        let delays = timeline
            .steps()
            .iter()
            .map(|s| s.delay_ms)
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0, 500, 1000, 1600, 2000]);
        // social links: 500ms + two 100ms staggers
        assert_eq!(timeline.total_ms(), 2700);
    }

    #[test]
    fn test_timeline_step_hides_instantly() {
        let step = hero_timeline(3).steps()[1];
        let hidden = step.style(RevealPhase::Hidden, 0);
        assert!(!hidden.contains("transition"));
        let shown = step.style(RevealPhase::Shown, 0);
        assert!(shown.contains("transition-delay: 500ms"));
        assert!(step.style(RevealPhase::Static, 0).is_empty());
    }
}
