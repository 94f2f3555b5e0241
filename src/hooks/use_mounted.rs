use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// Tells async work whether its component is still on screen. Results that
/// land after unmount are dropped instead of being written to stale state.
#[derive(Clone, PartialEq)]
pub struct MountedFlag(Rc<RefCell<bool>>);

impl MountedFlag {
    pub fn is_mounted(&self) -> bool {
        *self.0.borrow()
    }
}

#[hook]
pub fn use_mounted() -> MountedFlag {
    let flag = use_mut_ref(|| false);

    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            *flag.borrow_mut() = true;
            move || {
                *flag.borrow_mut() = false;
            }
        });
    }

    MountedFlag(flag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;
    use rstest::rstest;

    #[derive(Properties, PartialEq)]
    struct ReportProps {
        slot: Rc<RefCell<Option<MountedFlag>>>,
    }

    #[function_component(Report)]
    fn report(props: &ReportProps) -> Html {
        let mounted = use_mounted();
        *props.slot.borrow_mut() = Some(mounted.clone());
        html! { <span>{ if mounted.is_mounted() { "mounted" } else { "pending" } }</span> }
    }

    #[rstest]
    fn flag_stays_down_until_the_mount_effect_runs() {
        let slot = Rc::new(RefCell::new(None));

        let html = render_to_string::<Report>(ReportProps { slot: slot.clone() });

        assert!(html.contains("pending"));
        let flag = slot.borrow_mut().take().unwrap();
        // A result arriving now would be dropped
        assert!(!flag.is_mounted());
    }
}
