mod tests {
    use neopixel_controller::color::{
        COLOR_TABLE, Rgb, blend_colors, fill, rgb_from_u32, scale_color, wheel,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), BLACK);
        assert_eq!(
            scale_color(WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_wheel() {
        assert_eq!(wheel(0), GREEN);
        assert_eq!(wheel(85), RED);
        assert_eq!(wheel(170), BLUE);
        assert_eq!(wheel(255), GREEN);
        assert_eq!(
            wheel(42),
            Rgb {
                r: 126,
                g: 129,
                b: 0
            }
        );
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF_80_00), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(rgb_from_u32(0), BLACK);
    }

    #[test]
    fn test_fill() {
        let mut leds = [RED, GREEN, BLUE];
        fill(&mut leds, WHITE);
        assert_eq!(leds, [WHITE; 3]);
    }

    #[test]
    fn test_color_table() {
        let names: Vec<&str> = COLOR_TABLE.iter().map(|color| color.name).collect();
        assert_eq!(
            names,
            [
                "Red", "Green", "Blue", "Yellow", "Magenta", "Cyan", "Orange", "Purple", "White"
            ]
        );
        assert_eq!(COLOR_TABLE[0].rgb, RED);
        assert_eq!(COLOR_TABLE[1].rgb, GREEN);
        assert_eq!(COLOR_TABLE[8].rgb, WHITE);
    }
}
