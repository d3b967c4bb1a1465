use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BodyPortalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children directly under `document.body`, so overlays are not clipped by the game container.
#[function_component]
pub(crate) fn BodyPortal(props: &BodyPortalProps) -> Html {
    create_portal(props.children.clone(), gloo::utils::body().into())
}

/// Seed for the phrase selector, built from two `Math.random` draws.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;

    const HALF: f64 = 4_294_967_296.;
    let high = (HALF * random()) as u64;
    let low = (HALF * random()) as u64;
    (high << 32) | low
}
