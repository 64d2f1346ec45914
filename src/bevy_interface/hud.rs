use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use crate::bevy_interface::MoveStats;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app
            .add_plugins(FrameTimeDiagnosticsPlugin::default())
            .add_systems(Startup, setup_hud)
            .add_systems(Update, update_hud);
    }
}

#[derive(Component)]
pub struct HudText;

pub fn setup_hud(mut commands: Commands) {
    commands.spawn((
        Text::new("FPS: --"),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

pub fn update_hud(
    diagnostics: Res<DiagnosticsStore>,
    stats: Res<MoveStats>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud_query.single_mut() else { return };
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed());
    text.0 = hud_line(fps, &stats);
}

fn hud_line(fps: Option<f64>, stats: &MoveStats) -> String {
    let fps = match fps {
        Some(fps) => format!("{:.1}", fps),
        None => "--".to_string(),
    };
    format!("FPS: {}  Moves: {}  Blocked: {}", fps, stats.moves, stats.blocked)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hud_line_shows_moves_and_blocked_ticks() {
        let stats = MoveStats { moves: 3, blocked: 12 };
        assert_eq!(hud_line(Some(59.94), &stats), "FPS: 59.9  Moves: 3  Blocked: 12");
        assert_eq!(hud_line(None, &MoveStats::default()), "FPS: --  Moves: 0  Blocked: 0");
    }
}
