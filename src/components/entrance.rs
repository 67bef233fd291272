use yew::prelude::*;
use gloo_timers::callback::Timeout;

/// One-shot reveal flag. Becomes visible once `delay_ms` has elapsed and
/// stays that way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTimer {
    delay_ms: u32,
    visible: bool,
}

impl EntranceTimer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, visible: false }
    }

    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if elapsed_ms >= self.delay_ms {
            self.visible = true;
        }
        self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Delay for the `index`-th element of a staggered group.
pub fn stagger(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    base_ms.saturating_add((index as u32).saturating_mul(step_ms))
}

pub fn entrance_class(visible: bool) -> Classes {
    classes!("entrance", visible.then(|| "visible"))
}

#[hook]
pub fn use_entrance(delay_ms: u32) -> bool {
    let timer = use_state(|| EntranceTimer::new(delay_ms));

    {
        let timer = timer.clone();
        use_effect_with_deps(move |delay_ms| {
            let delay_ms = *delay_ms;
            // Dropping the handle on unmount cancels a reveal that hasn't fired.
            let timeout = Timeout::new(delay_ms, move || {
                let mut next = *timer;
                next.advance(delay_ms);
                timer.set(next);
            });
            move || drop(timeout)
        }, delay_ms);
    }

    timer.is_visible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_right_after_mount() {
        let timer = EntranceTimer::new(400);
        assert!(!timer.is_visible());
    }

    #[test]
    fn reveals_once_delay_elapses() {
        let mut timer = EntranceTimer::new(400);
        assert!(!timer.advance(399));
        assert!(timer.advance(400));
    }

    #[test]
    fn never_reverts_once_visible() {
        let mut timer = EntranceTimer::new(100);
        timer.advance(250);
        assert!(timer.advance(0));
        assert!(timer.advance(50));
        assert!(timer.is_visible());
    }

    #[test]
    fn zero_delay_reveals_on_first_tick() {
        let mut timer = EntranceTimer::new(0);
        assert!(timer.advance(0));
    }

    #[test]
    fn stagger_spaces_elements() {
        assert_eq!(stagger(400, 0, 150), 400);
        assert_eq!(stagger(400, 3, 150), 850);
        assert_eq!(stagger(u32::MAX, 2, 10), u32::MAX);
    }
}
