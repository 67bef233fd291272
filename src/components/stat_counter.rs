use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::entrance::entrance_class;

const TICK_MS: u32 = 30;

/// Count-up animation for a numeric stat label such as "50" or "99%".
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    suffix: &'static str,
    current: f64,
    ticks: u32,
}

impl CountUp {
    pub const STEPS: u32 = 60;

    /// `None` for labels that aren't a plain number, e.g. "24/7"; those are
    /// shown as written.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let digits = label.trim_end_matches(|c| c == '%' || c == '+');
        let target = digits.parse::<u32>().ok()?;
        let suffix = if label.contains('%') { "%" } else { "+" };
        Some(Self { target, suffix, current: 0.0, ticks: 0 })
    }

    /// Advances one step. Returns true once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return true;
        }
        self.ticks += 1;
        self.current += self.target as f64 / Self::STEPS as f64;
        if self.ticks >= Self::STEPS || self.current >= self.target as f64 {
            self.current = self.target as f64;
            self.ticks = Self::STEPS;
        }
        self.is_done()
    }

    pub fn is_done(&self) -> bool {
        self.ticks >= Self::STEPS
    }

    pub fn value(&self) -> u32 {
        if self.is_done() {
            self.target
        } else {
            self.current.floor() as u32
        }
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.value(), self.suffix)
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &Props) -> Html {
    let visible = use_state(|| false);
    let shown = {
        let value = props.value;
        use_state(move || match CountUp::from_label(value) {
            Some(count) => count.display(),
            None => value.to_string(),
        })
    };

    {
        let visible = visible.clone();
        let shown = shown.clone();
        use_effect_with_deps(move |(value, delay_ms)| {
            let alive = Rc::new(Cell::new(true));
            let count_up = CountUp::from_label(value);
            let delay_ms = *delay_ms;
            {
                let alive = alive.clone();
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    if !alive.get() {
                        return;
                    }
                    visible.set(true);
                    let Some(mut count) = count_up else {
                        return;
                    };
                    while alive.get() {
                        TimeoutFuture::new(TICK_MS).await;
                        if !alive.get() {
                            break;
                        }
                        let done = count.tick();
                        shown.set(count.display());
                        if done {
                            break;
                        }
                    }
                });
            }
            move || alive.set(false)
        }, (props.value, props.delay_ms));
    }

    html! {
        <div class={classes!("stat-counter", entrance_class(*visible))}>
            <div class="stat-counter-card">
                <div class="stat-counter-icon">{props.icon}</div>
                <div class="stat-counter-value">{(*shown).clone()}</div>
                <div class="stat-counter-label">{props.label}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_percent_labels() {
        let plain = CountUp::from_label("50").unwrap();
        assert_eq!(plain.display(), "0+");
        let percent = CountUp::from_label("99%").unwrap();
        assert_eq!(percent.display(), "0%");
        assert_eq!(CountUp::from_label("20+").unwrap().display(), "0+");
    }

    #[test]
    fn non_numeric_labels_are_not_counted() {
        assert_eq!(CountUp::from_label("24/7"), None);
        assert_eq!(CountUp::from_label("many"), None);
        assert_eq!(CountUp::from_label(""), None);
    }

    #[test]
    fn reaches_target_in_fixed_steps() {
        let mut count = CountUp::from_label("100%").unwrap();
        for _ in 0..CountUp::STEPS - 1 {
            assert!(!count.tick());
        }
        assert!(count.tick());
        assert_eq!(count.display(), "100%");
    }

    #[test]
    fn values_never_decrease_or_overshoot() {
        let mut count = CountUp::from_label("7").unwrap();
        let mut last = 0;
        while !count.tick() {
            assert!(count.value() >= last);
            assert!(count.value() <= 7);
            last = count.value();
        }
        assert_eq!(count.value(), 7);
        assert!(count.tick());
        assert_eq!(count.value(), 7);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let mut count = CountUp::from_label("0").unwrap();
        assert!(count.tick());
        assert_eq!(count.display(), "0+");
    }
}
