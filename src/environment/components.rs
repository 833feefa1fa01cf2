use bevy::prelude::*;

#[derive(Component)]
pub struct Sun;

#[derive(Component)]
pub struct WaterSurface;

#[derive(Component)]
pub struct SkyDome;

#[derive(Component)]
pub struct Stars;

#[derive(Component)]
pub struct MoonBody;
