use yew::prelude::*;

const VIEW_W: f64 = 58.0;
const VIEW_H: f64 = 63.0;

/// The letter "N", filled.
const LETTER_PATH: &str = "M22.5444 43.5946V25.8581H25.4136C26.7873 27.6491 28.0914 29.5445 29.326 31.5442C30.5606 33.5265 31.6822 35.5697 32.6908 37.6737L32.456 32.3789V25.8581H35.4556V43.5946H32.5864C31.4736 41.4036 30.3172 39.2039 29.1174 36.9956C27.9349 34.7698 26.6743 32.6745 25.3353 30.7096L25.544 36.813V43.5946H22.5444Z";
/// Upward chevron above the letter, stroked.
const CHEVRON_PATH: &str = "M15.5747 11.0736L28.9998 1.81488L42.4248 11.0736";

/// Fixed compass mark: map north is always screen up, since the camera
/// never rotates.
#[function_component(NorthIndicator)]
pub fn north_indicator() -> Html {
    let view_box = format!("0 0 {VIEW_W} {VIEW_H}");
    html! {<div style="position:absolute; top:140px; left:12px; background:rgba(0,0,0,0.5); border-radius:16px; padding:12px; pointer-events:none;">
        <svg width={VIEW_W.to_string()} height={VIEW_H.to_string()} viewBox={view_box} fill="none">
            <path d={LETTER_PATH} fill="white" />
            <path d={CHEVRON_PATH} stroke="#F3F3F3" stroke-width="3" />
        </svg>
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(path: &str) -> Vec<f64> {
        path.split(|c: char| c.is_ascii_alphabetic() || c == ' ')
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>().unwrap())
            .collect()
    }

    #[test]
    fn glyph_stays_inside_its_view_box() {
        for path in [LETTER_PATH, CHEVRON_PATH] {
            let coords = numbers(path);
            assert!(!coords.is_empty());
            for v in coords {
                assert!((0.0..=VIEW_H).contains(&v), "{v} escapes the view box");
            }
        }
    }

    #[test]
    fn chevron_points_straight_up() {
        let c = numbers(CHEVRON_PATH);
        let (left, apex, right) = ((c[0], c[1]), (c[2], c[3]), (c[4], c[5]));
        assert_eq!(left.1, right.1);
        assert!(apex.1 < left.1);
        // apex sits on the vertical centerline, arms mirror around it
        assert!((apex.0 - VIEW_W / 2.0).abs() < 0.01);
        assert!(((apex.0 - left.0) - (right.0 - apex.0)).abs() < 0.01);
    }
}
