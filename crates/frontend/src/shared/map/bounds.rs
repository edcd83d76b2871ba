use contracts::shared::MapMarker;

/// Минимальный отступ в градусах, чтобы одна точка не давала нулевую рамку
const MIN_PADDING_DEG: f64 = 0.01;

/// Рамка, в которую попадают все точки карты.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl MapBounds {
    /// Наименьшая рамка вокруг точек. `None` для пустого списка.
    pub fn from_markers<'a>(markers: impl IntoIterator<Item = &'a MapMarker>) -> Option<Self> {
        let mut iter = markers.into_iter();
        let first = iter.next()?;
        let start = Self {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(iter.fold(start, |b, m| Self {
            south: b.south.min(m.lat),
            west: b.west.min(m.lng),
            north: b.north.max(m.lat),
            east: b.east.max(m.lng),
        }))
    }

    /// Центр рамки: (lat, lng)
    pub fn center(&self) -> (f64, f64) {
        (
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }

    /// Расширяет рамку на `ratio` от размаха с каждой стороны, центр не меняется.
    pub fn padded(&self, ratio: f64) -> Self {
        let lat_pad = ((self.north - self.south) * ratio).max(MIN_PADDING_DEG);
        let lng_pad = ((self.east - self.west) * ratio).max(MIN_PADDING_DEG);
        Self {
            south: self.south - lat_pad,
            west: self.west - lng_pad,
            north: self.north + lat_pad,
            east: self.east + lng_pad,
        }
    }

    /// Позиция точки внутри рамки в процентах: (left, top).
    ///
    /// Север сверху, запад слева. Для вырожденной рамки точка уходит в центр.
    pub fn project(&self, marker: &MapMarker) -> (f64, f64) {
        let width = self.east - self.west;
        let height = self.north - self.south;
        let left = if width > 0.0 {
            (marker.lng - self.west) / width * 100.0
        } else {
            50.0
        };
        let top = if height > 0.0 {
            (self.north - marker.lat) / height * 100.0
        } else {
            50.0
        };
        (left, top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_from_markers_empty() {
        let markers: Vec<MapMarker> = Vec::new();
        assert_eq!(MapBounds::from_markers(&markers), None);
    }

    #[test]
    fn test_from_markers_spans_all_points() {
        let markers = vec![
            MapMarker::new(10.0, 20.0),
            MapMarker::new(30.0, 60.0),
            MapMarker::new(15.0, 40.0),
        ];
        let bounds = MapBounds::from_markers(&markers).unwrap();
        assert_eq!(
            bounds,
            MapBounds {
                south: 10.0,
                west: 20.0,
                north: 30.0,
                east: 60.0,
            }
        );
        assert_eq!(bounds.center(), (20.0, 40.0));
    }

    #[test]
    fn test_padded_keeps_center() {
        let markers = vec![MapMarker::new(10.0, 20.0), MapMarker::new(30.0, 60.0)];
        let bounds = MapBounds::from_markers(&markers).unwrap().padded(0.1);
        assert!(approx(bounds.south, 8.0));
        assert!(approx(bounds.north, 32.0));
        assert!(approx(bounds.west, 16.0));
        assert!(approx(bounds.east, 64.0));
        let (lat, lng) = bounds.center();
        assert!(approx(lat, 20.0));
        assert!(approx(lng, 40.0));
    }

    #[test]
    fn test_single_marker_projects_to_middle() {
        let marker = MapMarker::new(47.3, 8.5);
        let bounds = MapBounds::from_markers([&marker]).unwrap().padded(0.1);
        let (left, top) = bounds.project(&marker);
        assert!(approx(left, 50.0));
        assert!(approx(top, 50.0));
    }

    #[test]
    fn test_project_north_is_top() {
        let markers = vec![MapMarker::new(0.0, 0.0), MapMarker::new(10.0, 10.0)];
        let bounds = MapBounds::from_markers(&markers).unwrap();
        assert_eq!(bounds.project(&markers[0]), (0.0, 100.0));
        assert_eq!(bounds.project(&markers[1]), (100.0, 0.0));
    }
}
