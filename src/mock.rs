//! The mock display: an [Inky] that renders into a window instead of a panel

use core::marker::PhantomData;

use crate::buffer::Buffer;
use crate::color::{PanelColor, TriColor};
use crate::error::Error;
use crate::render::{RenderState, Renderer};
use crate::traits::{Inky, PreviewWindow, Variant};
use crate::transform::{self, panel_geometry, Orientation, PanelGeometry};

#[cfg(feature = "graphics")]
use crate::graphics::DisplayRotation;

/// Construction parameters of a mock display
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct MockConfig {
    /// Ink of the simulated panel
    pub color: PanelColor,
    /// Mirror the rows of the buffer before showing it
    pub h_flip: bool,
    /// Mirror the columns of the buffer before showing it
    pub v_flip: bool,
}

impl MockConfig {
    /// Config for a panel color given by name (`black`, `red` or `yellow`)
    pub fn new(color: &str, h_flip: bool, v_flip: bool) -> Result<Self, Error> {
        Ok(MockConfig {
            color: color.parse()?,
            h_flip,
            v_flip,
        })
    }
}

/// Desktop preview of an Inky display
///
/// `V` picks the panel ([crate::phat::Phat] or [crate::what::What]), `W` the window
/// the buffer is rendered into.
pub struct InkyMock<V, W> {
    config: MockConfig,
    geometry: PanelGeometry,
    buffer: Buffer,
    border: TriColor,
    renderer: Renderer<W>,
    #[cfg(feature = "graphics")]
    pub(crate) rotation: DisplayRotation,
    _variant: PhantomData<V>,
}

impl<V: Variant, W: PreviewWindow> InkyMock<V, W> {
    /// Creates a mock of panel `V` rendering into `window`
    ///
    /// Fails if `V` has a resolution no Inky panel has.
    pub fn new(config: MockConfig, window: W) -> Result<Self, Error> {
        let geometry = panel_geometry(V::WIDTH, V::HEIGHT)?;

        let renderer = Renderer::new(window, config.color.palette(), V::WIDTH, V::HEIGHT);

        Ok(InkyMock {
            config,
            geometry,
            buffer: Buffer::new(V::WIDTH, V::HEIGHT),
            border: TriColor::default(),
            renderer,
            #[cfg(feature = "graphics")]
            rotation: DisplayRotation::default(),
            _variant: PhantomData,
        })
    }

    /// The parameters this mock was built with
    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// Native geometry of the panel
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// Flips and rotation applied before the panel correction
    pub fn orientation(&self) -> Orientation {
        Orientation {
            v_flip: self.config.v_flip,
            h_flip: self.config.h_flip,
            quarter_turns: self.geometry.quarter_turns(),
        }
    }

    /// The buffer as it will be rendered: oriented and corrected for the panel
    pub fn transformed(&self) -> Result<Buffer, Error> {
        let region = self.orientation().apply(&self.buffer)?;
        transform::apply(&region, V::CORRECTION)
    }

    /// Whether something has been shown yet
    pub fn state(&self) -> RenderState {
        self.renderer.state()
    }

    /// The renderer, for inspecting the shown image
    pub fn renderer(&self) -> &Renderer<W> {
        &self.renderer
    }

    /// The renderer, for driving its window directly
    pub fn renderer_mut(&mut self) -> &mut Renderer<W> {
        &mut self.renderer
    }

    /// Process window events, following resizes
    pub fn pump_events(&mut self) -> Result<(), Error> {
        self.renderer.pump_events()
    }

    /// Keep the preview on screen until the window is closed
    pub fn run_until_closed(&mut self) -> Result<(), Error> {
        self.renderer.run_until_closed()
    }
}

#[cfg(feature = "simulator")]
impl<V: Variant> InkyMock<V, crate::window::MinifbWindow> {
    /// Creates a mock of panel `V` in a new desktop window
    pub fn open(config: MockConfig) -> Result<Self, Error> {
        let window = crate::window::MinifbWindow::with_size(V::WIDTH, V::HEIGHT)?;
        Self::new(config, window)
    }
}

impl<V: Variant, W: PreviewWindow> Inky for InkyMock<V, W> {
    fn width(&self) -> u32 {
        V::WIDTH
    }

    fn height(&self) -> u32 {
        V::HEIGHT
    }

    fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffer
    }

    fn border(&self) -> TriColor {
        self.border
    }

    fn set_border(&mut self, color: TriColor) {
        self.border = color;
    }

    fn show(&mut self) -> Result<(), Error> {
        log::info!("simulating {} ({})", V::NAME, self.config.color);
        let region = self.transformed()?;
        self.renderer.display(&region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BLACK, RED};
    use crate::phat::{InkyMockPhat, Phat};
    use crate::what::{InkyMockWhat, What};
    use crate::window::HeadlessWindow;
    use image::Rgb;

    struct Odd;

    impl Variant for Odd {
        const NAME: &'static str = "odd";
        const WIDTH: u32 = 250;
        const HEIGHT: u32 = 122;
        const CORRECTION: &'static [transform::Transform] = &[];
    }

    fn configs() -> Vec<MockConfig> {
        let mut configs = Vec::new();
        for color in [PanelColor::Black, PanelColor::Red, PanelColor::Yellow] {
            for h_flip in [false, true] {
                for v_flip in [false, true] {
                    configs.push(MockConfig {
                        color,
                        h_flip,
                        v_flip,
                    });
                }
            }
        }
        configs
    }

    fn phat(config: MockConfig) -> InkyMockPhat<HeadlessWindow> {
        InkyMock::new(config, HeadlessWindow::new(212, 104)).unwrap()
    }

    #[test]
    fn constructs_every_combination() {
        for config in configs() {
            let phat = InkyMock::<Phat, _>::new(config, HeadlessWindow::new(212, 104)).unwrap();
            assert_eq!((phat.width(), phat.height()), (212, 104));
            assert_eq!(phat.config(), &config);
            assert_eq!(phat.state(), RenderState::Uninitialized);

            let what = InkyMock::<What, _>::new(config, HeadlessWindow::new(400, 300)).unwrap();
            assert_eq!((what.width(), what.height()), (400, 300));
            assert_eq!(what.buffer().rows(), 300);
            assert_eq!(what.buffer().cols(), 400);
        }
    }

    #[test]
    fn rejects_unsupported_resolution() {
        let result = InkyMock::<Odd, _>::new(MockConfig::default(), HeadlessWindow::new(250, 122));
        assert_eq!(
            result.err(),
            Some(Error::UnsupportedResolution {
                width: 250,
                height: 122
            })
        );
    }

    #[test]
    fn rejects_unsupported_color() {
        assert_eq!(
            MockConfig::new("green", false, false),
            Err(Error::UnsupportedColor("green".into()))
        );
        let config = MockConfig::new("yellow", true, false).unwrap();
        assert_eq!(config.color, PanelColor::Yellow);
        assert!(config.h_flip);
        assert!(!config.v_flip);
    }

    #[test]
    fn phat_orientation() {
        let inky = phat(MockConfig::default());
        assert_eq!(inky.geometry().rotation, -90);
        assert_eq!(inky.orientation().quarter_turns, -1);
    }

    #[test]
    fn phat_transform_is_upright() {
        // the mounting rotation and the panel correction cancel out
        let mut inky = phat(MockConfig::default());
        inky.set_pixel(0, 0, BLACK);
        inky.set_pixel(211, 0, RED);
        inky.set_pixel(5, 103, RED);

        let region = inky.transformed().unwrap();
        assert_eq!((region.width(), region.height()), (212, 104));
        assert_eq!(&region, inky.buffer());
    }

    #[test]
    fn phat_transform_with_flips() {
        let mut inky = phat(MockConfig {
            color: PanelColor::Red,
            h_flip: true,
            v_flip: true,
        });
        inky.set_pixel(5, 3, RED);

        let region = inky.transformed().unwrap();
        assert_eq!(region.get(206, 100), Some(RED));
        assert_eq!(region.get(5, 3), Some(0));
        assert_eq!(region, inky.buffer().rot90(2));
    }

    #[test]
    fn phat_transform_single_flips() {
        let mut v = phat(MockConfig {
            v_flip: true,
            ..MockConfig::default()
        });
        v.set_pixel(5, 3, BLACK);
        assert_eq!(v.transformed().unwrap().get(206, 3), Some(BLACK));

        let mut h = phat(MockConfig {
            h_flip: true,
            ..MockConfig::default()
        });
        h.set_pixel(5, 3, BLACK);
        assert_eq!(h.transformed().unwrap().get(5, 100), Some(BLACK));
    }

    #[test]
    fn what_transform() {
        let mut inky: InkyMockWhat<HeadlessWindow> = InkyMock::new(
            MockConfig {
                v_flip: true,
                ..MockConfig::default()
            },
            HeadlessWindow::new(400, 300),
        )
        .unwrap();
        inky.set_pixel(0, 299, BLACK);

        let region = inky.transformed().unwrap();
        assert_eq!((region.rows(), region.cols()), (300, 400));
        assert_eq!(region.get(399, 299), Some(BLACK));
        assert_eq!(region, inky.buffer().flip_lr());
    }

    #[test]
    fn show_renders_palette() {
        let mut inky = phat(MockConfig::new("red", false, false).unwrap());
        inky.set_pixel(10, 20, RED);
        inky.set_pixel(11, 20, BLACK);
        inky.show().unwrap();

        assert_eq!(inky.state(), RenderState::Displaying);
        let canvas = inky.renderer().canvas().unwrap();
        assert_eq!(canvas.source().dimensions(), (212, 104));
        assert_eq!(canvas.source().get_pixel(10, 20), &Rgb([255, 0, 0]));
        assert_eq!(canvas.source().get_pixel(11, 20), &Rgb([0, 0, 0]));
        assert_eq!(canvas.source().get_pixel(12, 20), &Rgb([255, 255, 255]));
        assert_eq!(inky.renderer().window().frame_size(), (212, 104));
    }

    #[test]
    fn show_twice_reuses_canvas() {
        let mut inky = phat(MockConfig::default());
        inky.show().unwrap();
        assert_eq!(inky.state(), RenderState::Displaying);
        let first = inky.renderer().canvas().unwrap().frame().as_ptr();

        inky.set_pixel(1, 1, BLACK);
        inky.show().unwrap();
        assert_eq!(inky.state(), RenderState::Displaying);
        let canvas = inky.renderer().canvas().unwrap();
        assert_eq!(canvas.frame().as_ptr(), first);
        assert_eq!(canvas.source().get_pixel(1, 1), &Rgb([0, 0, 0]));
        assert_eq!(inky.renderer().window().presented(), 2);
    }

    #[test]
    fn window_resize_round_trip() {
        let mut inky = phat(MockConfig::new("yellow", false, false).unwrap());
        inky.set_pixel(100, 50, RED);
        inky.show().unwrap();
        let source = inky.renderer().canvas().unwrap().source().clone();
        let original = inky.renderer().canvas().unwrap().scaled().clone();

        inky.renderer_mut().window_mut().resize(424, 208);
        inky.pump_events().unwrap();
        let canvas = inky.renderer().canvas().unwrap();
        assert_eq!(canvas.scaled().dimensions(), (424, 208));
        assert_eq!(canvas.source(), &source);
        assert_eq!(inky.renderer().window().frame_size(), (424, 208));

        inky.renderer_mut().window_mut().resize(212, 104);
        inky.pump_events().unwrap();
        assert_eq!(inky.renderer().canvas().unwrap().scaled(), &original);
    }

    #[test]
    fn show_after_close_fails() {
        let mut inky = phat(MockConfig::default());
        inky.show().unwrap();
        inky.renderer_mut().window_mut().close();
        inky.run_until_closed().unwrap();
        assert_eq!(inky.state(), RenderState::Uninitialized);
        assert_eq!(inky.show(), Err(Error::WindowClosed));
    }

    #[test]
    fn drawing_api() {
        let mut inky = phat(MockConfig::default());
        inky.set_pixel(212, 0, BLACK);
        inky.set_pixel(0, 104, BLACK);
        assert!(inky.buffer().as_slice().iter().all(|&p| p == 0));

        inky.fill(BLACK);
        assert!(inky.buffer().as_slice().iter().all(|&p| p == BLACK));

        let image = vec![RED; 212 * 104];
        inky.set_image(&image).unwrap();
        assert_eq!(inky.buffer().get(211, 103), Some(RED));
        assert_eq!(
            inky.set_image(&image[1..]),
            Err(Error::ShapeMismatch {
                expected: 212 * 104,
                actual: 212 * 104 - 1
            })
        );

        assert_eq!(inky.border(), TriColor::White);
        inky.set_border(TriColor::Chromatic);
        assert_eq!(inky.border(), TriColor::Chromatic);
    }

    // the native path is only type checked, opening a window needs a display
    #[cfg(feature = "simulator")]
    #[test]
    fn open_uses_native_window() {
        let open_phat: fn(MockConfig) -> Result<InkyMockPhat, Error> = InkyMockPhat::open;
        let open_what: fn(MockConfig) -> Result<InkyMockWhat, Error> = InkyMockWhat::open;
        let _ = (open_phat, open_what);
    }
}
