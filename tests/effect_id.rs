mod tests {
    use neopixel_controller::{EffectId, effect::EFFECT_COUNT};

    #[test]
    fn test_effect_order() {
        let names: Vec<&str> = EffectId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(
            names,
            [
                "All On",
                "Aurora",
                "Rainbow",
                "Color Wipe",
                "Chase",
                "Pulse",
                "Runner",
                "Fire",
                "Breathing",
                "Off"
            ]
        );
    }

    #[test]
    fn test_effect_id_from_raw() {
        assert_eq!(EffectId::from_raw(1), Some(EffectId::Aurora));
        assert_eq!(EffectId::from_raw(9), Some(EffectId::Off));
        assert_eq!(EffectId::from_raw(10), None);
    }

    #[test]
    fn test_effect_index_round_trip() {
        for (index, id) in EffectId::ALL.iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(EffectId::from_index(index), *id);
        }
        assert_eq!(EffectId::from_index(EFFECT_COUNT), EffectId::AllOn);
    }

    #[test]
    fn test_effect_id_parse() {
        assert_eq!(
            EffectId::parse_from_str("Color Wipe"),
            Some(EffectId::ColorWipe)
        );
        assert_eq!(EffectId::parse_from_str("color wipe"), None);
    }

    #[test]
    fn test_palette_effects() {
        assert!(!EffectId::Aurora.uses_color());
        assert_eq!(EffectId::Fire.palette_name(), Some("Fire"));
        assert_eq!(EffectId::Off.palette_name(), None);
        assert!(!EffectId::Off.uses_color());
        assert!(EffectId::Breathing.uses_color());
    }

    #[test]
    fn test_slot_id_matches() {
        for id in EffectId::ALL {
            let slot = id.to_slot::<8>(Default::default());
            assert_eq!(slot.id(), id);
        }
    }
}
