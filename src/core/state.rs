use bevy::prelude::States;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum AppState {
    #[default]
    Loading,
    Sailing,
    // The ship model never arrived; the rest of the scene keeps running without it
    ShipMissing,
}
