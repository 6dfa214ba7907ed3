//! ドラッグでの横スクロール
//!
//! Idle → Dragging(start_x) → Idle の状態機械。
//! 移動サンプルごとに開始位置と比較し、自然スクロール方向の
//! スクロール指示を返す（左へドラッグ → 右へスクロール）。

use crate::scroll::ScrollDirection;

/// ドラッグ状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragGesture {
    #[default]
    Idle,
    Dragging {
        start_x: f64,
        /// 直前に記録した移動サンプル
        last_x: Option<f64>,
    },
}

impl DragGesture {
    pub fn new() -> Self {
        Self::Idle
    }

    /// ドラッグ開始: 開始X座標を記録
    pub fn start(&mut self, x: f64) {
        *self = DragGesture::Dragging {
            start_x: x,
            last_x: None,
        };
    }

    /// 移動サンプル
    ///
    /// 直前と同じ座標のサンプルは再発火しない
    pub fn move_to(&mut self, x: f64) -> Option<ScrollDirection> {
        let DragGesture::Dragging { start_x, last_x } = self else {
            return None;
        };
        if *last_x == Some(x) {
            return None;
        }
        *last_x = Some(x);

        if x < *start_x {
            Some(ScrollDirection::Right)
        } else if x > *start_x {
            Some(ScrollDirection::Left)
        } else {
            None
        }
    }

    /// ドラッグ終了
    pub fn end(&mut self) {
        *self = DragGesture::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragGesture::Dragging { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(gesture: &mut DragGesture, xs: &[f64]) -> Vec<Option<ScrollDirection>> {
        xs.iter().map(|&x| gesture.move_to(x)).collect()
    }

    #[test]
    fn test_idle_moves_do_nothing() {
        let mut gesture = DragGesture::new();
        assert_eq!(feed(&mut gesture, &[10.0, 400.0]), vec![None, None]);
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn test_drag_left_scrolls_right() {
        let mut gesture = DragGesture::new();
        gesture.start(500.0);
        assert_eq!(
            feed(&mut gesture, &[480.0, 300.0]),
            vec![Some(ScrollDirection::Right), Some(ScrollDirection::Right)]
        );
    }

    #[test]
    fn test_drag_right_scrolls_left() {
        let mut gesture = DragGesture::new();
        gesture.start(100.0);
        assert_eq!(gesture.move_to(250.0), Some(ScrollDirection::Left));
    }

    #[test]
    fn test_direction_compares_against_start_not_previous_sample() {
        let mut gesture = DragGesture::new();
        gesture.start(500.0);
        // 300 → 400 は右向きの移動だが、開始位置より左なので右スクロールのまま
        assert_eq!(
            feed(&mut gesture, &[300.0, 400.0, 600.0]),
            vec![
                Some(ScrollDirection::Right),
                Some(ScrollDirection::Right),
                Some(ScrollDirection::Left),
            ]
        );
    }

    #[test]
    fn test_repeated_sample_does_not_refire() {
        let mut gesture = DragGesture::new();
        gesture.start(500.0);
        assert_eq!(
            feed(&mut gesture, &[450.0, 450.0, 450.0, 440.0]),
            vec![
                Some(ScrollDirection::Right),
                None,
                None,
                Some(ScrollDirection::Right),
            ]
        );
    }

    #[test]
    fn test_sample_at_start_position_is_neutral() {
        let mut gesture = DragGesture::new();
        gesture.start(200.0);
        assert_eq!(gesture.move_to(200.0), None);
    }

    #[test]
    fn test_end_returns_to_idle() {
        let mut gesture = DragGesture::new();
        gesture.start(200.0);
        assert!(gesture.is_dragging());
        gesture.end();
        assert_eq!(gesture, DragGesture::Idle);
        assert_eq!(gesture.move_to(10.0), None);
    }

    #[test]
    fn test_restart_resets_start_position() {
        let mut gesture = DragGesture::new();
        gesture.start(200.0);
        gesture.move_to(100.0);
        gesture.end();
        gesture.start(50.0);
        assert_eq!(gesture.move_to(100.0), Some(ScrollDirection::Left));
    }
}
