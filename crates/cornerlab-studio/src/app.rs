use winit::event::WindowEvent;

use cornerlab_engine::bitmap::SourceImage;
use cornerlab_engine::core::{App, AppControl, FrameCtx};
use cornerlab_engine::host::{LayerMode, RenderHost};
use cornerlab_engine::input::{InputFrame, Key};
use cornerlab_engine::render::SurfaceBlitRenderer;
use cornerlab_engine::strategy::{create_strategy, CornerPercent, StrategyKind};

/// What a key press asks the studio to do.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Select(StrategyKind),
    Layer(LayerMode),
    StepPercent(i32),
    SetPercent(CornerPercent),
    Exit,
}

impl Command {
    pub fn for_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Digit1 => Command::Select(StrategyKind::PathClip),
            Key::Digit2 => Command::Select(StrategyKind::OutlineClip),
            Key::Digit3 => Command::Select(StrategyKind::EffectClip),
            Key::H => Command::Layer(LayerMode::Hardware),
            Key::S => Command::Layer(LayerMode::Software),
            Key::ArrowUp | Key::ArrowRight => Command::StepPercent(1),
            Key::ArrowDown | Key::ArrowLeft => Command::StepPercent(-1),
            Key::PageUp => Command::StepPercent(10),
            Key::PageDown => Command::StepPercent(-10),
            Key::Home => Command::SetPercent(CornerPercent::MIN),
            Key::End => Command::SetPercent(CornerPercent::MAX),
            Key::Escape => Command::Exit,
            _ => return None,
        };
        Some(command)
    }

    /// Commands for one frame of input, in a stable order.
    pub fn from_input(frame: &InputFrame) -> Vec<Self> {
        let mut keys: Vec<Key> = frame.keys_pressed.iter().copied().collect();
        keys.sort_unstable();

        let mut commands: Vec<Self> = keys.into_iter().filter_map(Self::for_key).collect();
        let steps = frame.wheel_steps();
        if steps != 0 {
            commands.push(Command::StepPercent(steps));
        }
        commands
    }
}

/// Owns the host and puts its frames on screen.
pub struct StudioApp {
    source: SourceImage,
    host: RenderHost,
    blit: SurfaceBlitRenderer,
    title: String,
}

impl StudioApp {
    pub fn new(source: SourceImage, host: RenderHost) -> Self {
        Self {
            source,
            host,
            blit: SurfaceBlitRenderer::new(),
            title: String::new(),
        }
    }

    pub fn host(&self) -> &RenderHost {
        &self.host
    }

    /// Applies `command`; returns `Exit` when the studio should close.
    pub fn apply(&mut self, command: Command) -> AppControl {
        match command {
            Command::Select(kind) => {
                if self.host.strategy().kind() != kind {
                    let strategy = create_strategy(kind, &self.source, &self.host.sink());
                    self.host.set_strategy(strategy);
                }
            }
            Command::Layer(mode) => self.host.set_layer_mode(mode),
            Command::StepPercent(delta) => {
                let percent = self.host.corner_percent().step(delta);
                if percent != self.host.corner_percent() {
                    self.host.set_corner_percent(percent);
                }
            }
            Command::SetPercent(percent) => self.host.set_corner_percent(percent),
            Command::Exit => return AppControl::Exit,
        }
        AppControl::Continue
    }

    pub fn window_title(&self) -> String {
        let cost = match self.host.average_render_time() {
            Some(avg) => format!("{:.2} ms", avg.as_secs_f64() * 1000.0),
            None => "n/a".to_string(),
        };
        format!(
            "cornerlab | {} | {} | {}% | avg {}",
            self.host.strategy().kind(),
            self.host.layer_mode(),
            self.host.corner_percent().get(),
            cost
        )
    }
}

impl App for StudioApp {
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        if let WindowEvent::Resized(size) = event {
            self.host.on_resize(size.width, size.height);
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        for command in Command::from_input(ctx.input_frame) {
            if self.apply(command) == AppControl::Exit {
                return AppControl::Exit;
            }
        }

        let (w, h) = ctx.window.physical_size();
        if self.host.size() != (w, h) {
            self.host.on_resize(w, h);
        }

        let title = self.window_title();
        if title != self.title {
            ctx.window.set_title(&title);
            self.title = title;
        }

        let Self { host, blit, .. } = self;
        let clear = host.config().clear_color;
        match host.render() {
            Some(frame) => ctx.render(clear, |rctx, target| blit.render(rctx, target, &frame)),
            None => AppControl::Continue,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.host.needs_redraw()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use image::{Rgba, RgbaImage};

    use cornerlab_engine::compositor::{Compositor, SharedClipSink};
    use cornerlab_engine::host::HostConfig;
    use cornerlab_engine::input::{InputEvent, InputState, KeyState, Modifiers, MouseWheelDelta};

    use super::*;

    fn studio(config: HostConfig) -> StudioApp {
        let img = RgbaImage::from_fn(32, 32, |x, y| Rgba([(x * 8) as u8, (y * 8) as u8, 90, 255]));
        let source = SourceImage::from_rgba(img).unwrap();
        let compositor = Rc::new(RefCell::new(Compositor::new()));
        let sink: SharedClipSink = compositor.clone();
        let strategy = create_strategy(config.strategy, &source, &sink);
        let mut host = RenderHost::new(strategy, compositor, config);
        host.on_resize(200, 150);
        StudioApp::new(source, host)
    }

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(Command::for_key(Key::Digit2), Some(Command::Select(StrategyKind::OutlineClip)));
        assert_eq!(Command::for_key(Key::S), Some(Command::Layer(LayerMode::Software)));
        assert_eq!(Command::for_key(Key::PageDown), Some(Command::StepPercent(-10)));
        assert_eq!(Command::for_key(Key::End), Some(Command::SetPercent(CornerPercent::MAX)));
        assert_eq!(Command::for_key(Key::Escape), Some(Command::Exit));
        assert_eq!(Command::for_key(Key::Space), None);
    }

    #[test]
    fn wheel_steps_become_percent_steps() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let modifiers = Modifiers::default();
        state.apply_event(
            &mut frame,
            InputEvent::MouseWheel { delta: MouseWheelDelta::Line { x: 0.0, y: -3.0 }, modifiers },
        );
        state.apply_event(
            &mut frame,
            InputEvent::Key { key: Key::H, state: KeyState::Pressed, modifiers, repeat: false },
        );
        assert_eq!(
            Command::from_input(&frame),
            vec![Command::Layer(LayerMode::Hardware), Command::StepPercent(-3)]
        );
    }

    #[test]
    fn simultaneous_keys_follow_key_order() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        let modifiers = Modifiers::default();
        for key in [Key::S, Key::Digit3, Key::Escape, Key::ArrowUp] {
            state.apply_event(
                &mut frame,
                InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false },
            );
        }
        assert_eq!(
            Command::from_input(&frame),
            vec![
                Command::Exit,
                Command::StepPercent(1),
                Command::Select(StrategyKind::EffectClip),
                Command::Layer(LayerMode::Software),
            ]
        );
    }

    #[test]
    fn selecting_a_strategy_swaps_it() {
        let mut app = studio(HostConfig::default().with_corner_percent(CornerPercent::new(20)));
        assert_eq!(app.apply(Command::Select(StrategyKind::EffectClip)), AppControl::Continue);
        assert_eq!(app.host().strategy().kind(), StrategyKind::EffectClip);
        assert_eq!(app.host().strategy().radius(), 40.0);
    }

    #[test]
    fn percent_steps_stay_in_range() {
        let mut app = studio(HostConfig::default());
        app.apply(Command::StepPercent(-5));
        assert_eq!(app.host().corner_percent(), CornerPercent::MIN);
        app.apply(Command::StepPercent(30));
        assert_eq!(app.host().corner_percent().get(), 30);
        assert_eq!(app.host().strategy().radius(), 60.0);
        app.apply(Command::SetPercent(CornerPercent::MAX));
        assert_eq!(app.host().strategy().radius(), 200.0);
    }

    #[test]
    fn exit_command_stops_the_app() {
        let mut app = studio(HostConfig::default());
        assert_eq!(app.apply(Command::Exit), AppControl::Exit);
    }

    #[test]
    fn title_reports_state() {
        let mut app = studio(HostConfig::default().with_layer_mode(LayerMode::Software));
        app.apply(Command::SetPercent(CornerPercent::new(25)));
        let title = app.window_title();
        assert!(title.contains(&StrategyKind::PathClip.to_string()));
        assert!(title.contains(&LayerMode::Software.to_string()));
        assert!(title.contains("25%"));
        assert!(title.ends_with("avg n/a"));
    }
}
