//! Shape types for glyph construction
//!
//! Each shape is its own type that knows how to:
//! - Transform itself in place (rotate, mirror, translate)
//! - Keep its attachment point (`center`) in step with its geometry
//! - Render itself to an SVG node
//!
//! The closed set of variants is dispatched through [`ShapeKind`].

use enum_dispatch::enum_dispatch;
use svg::Node;
use svg::node::element::{
    Circle as SvgCircle, Group as SvgGroup, Path as SvgPath, Polyline as SvgPolyline,
};

use super::geometry::{flip_coordinate, rotate_point};
use crate::types::{Point, fmt_num, fmt_point};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Shape {
    /// The attachment point of the shape.
    ///
    /// This is not necessarily the bounding-box center: it starts out wherever
    /// the shape was told it is and then follows every transform.
    fn center(&self) -> Point;

    /// Override the attachment point without moving any geometry.
    fn set_center(&mut self, center: Point);

    /// Render this shape to an SVG node
    fn render(&self) -> Box<dyn Node>;

    /// Rotate clockwise by `degrees` about `pivot`, or about the shape's own
    /// center when no pivot is given.
    fn rotate(&mut self, degrees: f64, pivot: Option<Point>);

    /// Mirror across the vertical line `x = axis` (own center when `None`).
    fn flip_horizontal(&mut self, axis: Option<f64>);

    /// Mirror across the horizontal line `y = axis` (own center when `None`).
    fn flip_vertical(&mut self, axis: Option<f64>);

    /// Shift by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Move the shape so its center lands exactly on `(x, y)`.
    fn attach_center(&mut self, x: f64, y: f64) {
        let center = self.center();
        self.translate(x - center.x, y - center.y);
        // translate can drift by an ulp; the target is authoritative
        self.set_center(Point::new(x, y));
    }
}

/// Any shape that can appear in a glyph
#[enum_dispatch(Shape)]
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Polyline(Polyline),
    Circle(Circle),
    Path(Path),
    Group(Group),
}

impl ShapeKind {
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            ShapeKind::Polyline(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            ShapeKind::Group(g) => Some(g),
            _ => None,
        }
    }

    /// Short variant name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeKind::Polyline(_) => "polyline",
            ShapeKind::Circle(_) => "circle",
            ShapeKind::Path(_) => "path",
            ShapeKind::Group(_) => "group",
        }
    }
}

// ============================================================================
// Style
// ============================================================================

/// Rendering attributes passed through to SVG unchanged.
///
/// Ordered, so output is deterministic; setting an existing key replaces it
/// in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    entries: Vec<(String, String)>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            entries: vec![
                ("fill".to_string(), "none".to_string()),
                ("stroke".to_string(), "black".to_string()),
            ],
        }
    }
}

impl Style {
    /// A style with no attributes at all.
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn apply<T: Node>(&self, node: &mut T) {
        for (key, value) in self.iter() {
            node.assign(key, value);
        }
    }
}

// ============================================================================
// Shape Types
// ============================================================================

/// An open polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    center: Point,
    pub style: Style,
}

impl Polyline {
    /// Build a polyline whose center is the midpoint of its bounding box.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let center = Point::new(
            axis_midpoint(points.iter().map(|p| p.x)).unwrap_or(0.0),
            axis_midpoint(points.iter().map(|p| p.y)).unwrap_or(0.0),
        );
        Self {
            points,
            center,
            style: Style::default(),
        }
    }

    /// Override the horizontal attachment coordinate (asymmetric glyphs).
    pub fn with_center_x(mut self, x: f64) -> Self {
        self.center.x = x;
        self
    }

    /// Override the vertical attachment coordinate (asymmetric glyphs).
    pub fn with_center_y(mut self, y: f64) -> Self {
        self.center.y = y;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Insert points before the current first point.
    pub fn prepend_points(&mut self, points: impl IntoIterator<Item = Point>) {
        let mut joined: Vec<Point> = points.into_iter().collect();
        joined.append(&mut self.points);
        self.points = joined;
    }

    /// Add points after the current last point.
    pub fn append_points(&mut self, points: impl IntoIterator<Item = Point>) {
        self.points.extend(points);
    }

    /// The `points` attribute: `x1,y1 x2,y2 ...`
    pub fn points_attr(&self) -> String {
        self.points
            .iter()
            .map(|p| fmt_point(*p))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Shape for Polyline {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn render(&self) -> Box<dyn Node> {
        let mut node = SvgPolyline::new().set("points", self.points_attr());
        self.style.apply(&mut node);
        Box::new(node)
    }

    fn rotate(&mut self, degrees: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or(self.center);
        for p in &mut self.points {
            *p = rotate_point(*p, pivot, degrees);
        }
        self.center = rotate_point(self.center, pivot, degrees);
    }

    fn flip_horizontal(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.x);
        for p in &mut self.points {
            p.x = flip_coordinate(p.x, axis);
        }
        self.center.x = flip_coordinate(self.center.x, axis);
    }

    fn flip_vertical(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.y);
        for p in &mut self.points {
            p.y = flip_coordinate(p.y, axis);
        }
        self.center.y = flip_coordinate(self.center.y, axis);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let delta = Point::new(dx, dy);
        for p in &mut self.points {
            *p += delta;
        }
        self.center += delta;
    }
}

/// A circle
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    pub radius: f64,
    pub style: Style,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Shape for Circle {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn render(&self) -> Box<dyn Node> {
        let mut node = SvgCircle::new()
            .set("cx", fmt_num(self.center.x))
            .set("cy", fmt_num(self.center.y))
            .set("r", fmt_num(self.radius));
        self.style.apply(&mut node);
        Box::new(node)
    }

    fn rotate(&mut self, degrees: f64, pivot: Option<Point>) {
        // self-rotation leaves a circle unchanged
        if let Some(pivot) = pivot {
            self.center = rotate_point(self.center, pivot, degrees);
        }
    }

    fn flip_horizontal(&mut self, axis: Option<f64>) {
        if let Some(axis) = axis {
            self.center.x = flip_coordinate(self.center.x, axis);
        }
    }

    fn flip_vertical(&mut self, axis: Option<f64>) {
        if let Some(axis) = axis {
            self.center.y = flip_coordinate(self.center.y, axis);
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.center += Point::new(dx, dy);
    }
}

/// Numeric arguments of a path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathArgs {
    None,
    /// A single value: `y` for vertical-line commands, `x` otherwise.
    One(f64),
    Two(f64, f64),
}

/// A single path draw command: a letter plus up to two numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathCommand {
    pub letter: char,
    pub args: PathArgs,
}

impl PathCommand {
    pub fn new(letter: char, args: PathArgs) -> Self {
        Self { letter, args }
    }

    pub fn move_to(x: f64, y: f64) -> Self {
        Self::new('M', PathArgs::Two(x, y))
    }

    pub fn line_to(x: f64, y: f64) -> Self {
        Self::new('L', PathArgs::Two(x, y))
    }

    pub fn horizontal(x: f64) -> Self {
        Self::new('H', PathArgs::One(x))
    }

    pub fn vertical(y: f64) -> Self {
        Self::new('V', PathArgs::One(y))
    }

    pub fn close() -> Self {
        Self::new('Z', PathArgs::None)
    }

    /// Vertical-line commands carry only a y value.
    pub fn is_vertical(&self) -> bool {
        self.letter.eq_ignore_ascii_case(&'v')
    }

    /// The coordinates this command states explicitly.
    pub fn coords(&self) -> (Option<f64>, Option<f64>) {
        match self.args {
            PathArgs::None => (None, None),
            PathArgs::One(v) if self.is_vertical() => (None, Some(v)),
            PathArgs::One(v) => (Some(v), None),
            PathArgs::Two(x, y) => (Some(x), Some(y)),
        }
    }

    /// Same letter and argument count, with coordinates taken from `(x, y)`.
    fn with_coords(self, x: f64, y: f64) -> Self {
        let args = match self.args {
            PathArgs::None => PathArgs::None,
            PathArgs::One(_) if self.is_vertical() => PathArgs::One(y),
            PathArgs::One(_) => PathArgs::One(x),
            PathArgs::Two(_, _) => PathArgs::Two(x, y),
        };
        Self { args, ..self }
    }

    fn map_coords(self, fx: impl Fn(f64) -> f64, fy: impl Fn(f64) -> f64) -> Self {
        let (x, y) = self.coords();
        self.with_coords(x.map(fx).unwrap_or(0.0), y.map(fy).unwrap_or(0.0))
    }

    fn to_data(self) -> String {
        match self.args {
            PathArgs::None => self.letter.to_string(),
            PathArgs::One(v) => format!("{} {}", self.letter, fmt_num(v)),
            PathArgs::Two(x, y) => format!("{} {},{}", self.letter, fmt_num(x), fmt_num(y)),
        }
    }
}

/// A path made of straight-segment commands
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
    center: Point,
    pub style: Style,
}

impl Path {
    /// Build a path whose center is the midpoint of the bounding box of every
    /// coordinate present in the commands.
    pub fn new(commands: impl IntoIterator<Item = PathCommand>) -> Self {
        let commands: Vec<PathCommand> = commands.into_iter().collect();
        let center = Point::new(
            axis_midpoint(commands.iter().filter_map(|c| c.coords().0)).unwrap_or(0.0),
            axis_midpoint(commands.iter().filter_map(|c| c.coords().1)).unwrap_or(0.0),
        );
        Self {
            commands,
            center,
            style: Style::default(),
        }
    }

    pub fn with_center_x(mut self, x: f64) -> Self {
        self.center.x = x;
        self
    }

    pub fn with_center_y(mut self, y: f64) -> Self {
        self.center.y = y;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The `d` attribute: `M x,y L x,y V y Z`
    pub fn data_attr(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_data())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Shape for Path {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn render(&self) -> Box<dyn Node> {
        let mut node = SvgPath::new().set("d", self.data_attr());
        self.style.apply(&mut node);
        Box::new(node)
    }

    fn rotate(&mut self, degrees: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or(self.center);
        // commands with missing coordinates inherit them from the pen position
        let mut pen = Point::ZERO;
        for command in &mut self.commands {
            let (x, y) = command.coords();
            pen = Point::new(x.unwrap_or(pen.x), y.unwrap_or(pen.y));
            let rotated = rotate_point(pen, pivot, degrees);
            *command = command.with_coords(rotated.x, rotated.y);
        }
        self.center = rotate_point(self.center, pivot, degrees);
    }

    fn flip_horizontal(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.x);
        for command in &mut self.commands {
            *command = command.map_coords(|x| flip_coordinate(x, axis), |y| y);
        }
        self.center.x = flip_coordinate(self.center.x, axis);
    }

    fn flip_vertical(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.y);
        for command in &mut self.commands {
            *command = command.map_coords(|x| x, |y| flip_coordinate(y, axis));
        }
        self.center.y = flip_coordinate(self.center.y, axis);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for command in &mut self.commands {
            *command = command.map_coords(|x| x + dx, |y| y + dy);
        }
        self.center += Point::new(dx, dy);
    }
}

/// A composite of child shapes that transform together
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    children: Vec<ShapeKind>,
    center: Point,
}

impl Group {
    /// Build a group centered on the mean of its children's centers.
    ///
    /// The center is computed once, here. Later transforms move the stored
    /// center directly rather than re-averaging the children.
    pub fn new(children: impl IntoIterator<Item = ShapeKind>) -> Self {
        let children: Vec<ShapeKind> = children.into_iter().collect();
        let center = if children.is_empty() {
            Point::ZERO
        } else {
            let sum: Point = children.iter().map(|c| c.center()).sum();
            sum / children.len() as f64
        };
        Self { children, center }
    }

    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn children(&self) -> &[ShapeKind] {
        &self.children
    }

    /// Append a child. The group's center is left where it is.
    pub fn push(&mut self, child: impl Into<ShapeKind>) {
        self.children.push(child.into());
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl Shape for Group {
    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    fn render(&self) -> Box<dyn Node> {
        let group = self
            .children
            .iter()
            .fold(SvgGroup::new(), |group, child| group.add(child.render()));
        Box::new(group)
    }

    fn rotate(&mut self, degrees: f64, pivot: Option<Point>) {
        let pivot = pivot.unwrap_or(self.center);
        for child in &mut self.children {
            child.rotate(degrees, Some(pivot));
        }
        self.center = rotate_point(self.center, pivot, degrees);
    }

    fn flip_horizontal(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.x);
        for child in &mut self.children {
            child.flip_horizontal(Some(axis));
        }
        self.center.x = flip_coordinate(self.center.x, axis);
    }

    fn flip_vertical(&mut self, axis: Option<f64>) {
        let axis = axis.unwrap_or(self.center.y);
        for child in &mut self.children {
            child.flip_vertical(Some(axis));
        }
        self.center.y = flip_coordinate(self.center.y, axis);
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
        self.center += Point::new(dx, dy);
    }
}

/// Midpoint of the range spanned by `values`, or `None` if there are none.
fn axis_midpoint(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;
    Some(min + (max - min) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    fn sample_polyline() -> Polyline {
        Polyline::new([pt(0.0, 10.0), pt(0.0, 0.0), pt(6.0, 0.0), pt(6.0, 10.0)])
    }

    fn sample_path() -> Path {
        Path::new([
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(0.0, 6.0),
            PathCommand::line_to(6.0, 6.0),
            PathCommand::line_to(6.0, 0.0),
            PathCommand::close(),
        ])
    }

    fn sample_group() -> Group {
        Group::new([
            ShapeKind::from(sample_polyline()),
            ShapeKind::from(Circle::new(pt(3.0, 5.0), 3.0)),
            ShapeKind::from(sample_path()),
        ])
        .with_center(pt(3.0, 4.0))
    }

    fn all_samples() -> Vec<ShapeKind> {
        vec![
            sample_polyline().into(),
            Circle::new(pt(3.0, 5.0), 3.0).into(),
            sample_path().into(),
            sample_group().into(),
        ]
    }

    #[test]
    fn polyline_center_is_bbox_midpoint() {
        assert_eq!(sample_polyline().center(), pt(3.0, 5.0));
    }

    #[test]
    fn polyline_center_override() {
        let line = Polyline::new([pt(0.0, 0.0), pt(6.0, 0.0)]).with_center_y(5.0);
        assert_eq!(line.center(), pt(3.0, 5.0));

        let line = Polyline::new([pt(5.0, 0.0), pt(0.0, 5.0), pt(5.0, 10.0)]).with_center_x(3.0);
        assert_eq!(line.center(), pt(3.0, 5.0));
    }

    #[test]
    fn empty_polyline_and_path_center_at_origin() {
        assert_eq!(Polyline::new([]).center(), Point::ZERO);
        assert_eq!(Path::new([]).center(), Point::ZERO);
        assert_eq!(Path::new([PathCommand::close()]).center(), Point::ZERO);
    }

    #[test]
    fn path_center_uses_present_coordinates() {
        assert_eq!(sample_path().center(), pt(3.0, 3.0));

        // a lone vertical command contributes only a y value
        let path = Path::new([PathCommand::move_to(2.0, 0.0), PathCommand::vertical(8.0)]);
        assert_eq!(path.center(), pt(2.0, 4.0));
    }

    #[test]
    fn group_center_is_mean_of_children() {
        let group = Group::new([
            ShapeKind::from(Circle::new(pt(0.0, 0.0), 1.0)),
            ShapeKind::from(Circle::new(pt(4.0, 2.0), 1.0)),
        ]);
        assert_eq!(group.center(), pt(2.0, 1.0));
        assert_eq!(Group::new([]).center(), Point::ZERO);
    }

    #[test]
    fn rotate_then_reverse_restores_quarter_turns() {
        for original in all_samples() {
            for degrees in [90.0, 180.0, 270.0] {
                let mut shape = original.clone();
                shape.rotate(degrees, None);
                shape.rotate(-degrees, Some(original.center()));
                assert_eq!(shape, original, "{} at {degrees}", original.kind_name());
            }
        }
    }

    /// Every coordinate of `a` within `tolerance` of the matching one in `b`.
    fn assert_close(a: &ShapeKind, b: &ShapeKind, tolerance: f64) {
        let close = |p: Point, q: Point| assert!(p.abs_diff_eq(q, tolerance), "{p} vs {q}");
        close(a.center(), b.center());
        match (a, b) {
            (ShapeKind::Polyline(a), ShapeKind::Polyline(b)) => {
                assert_eq!(a.points().len(), b.points().len());
                for (p, q) in a.points().iter().zip(b.points()) {
                    close(*p, *q);
                }
            }
            (ShapeKind::Circle(a), ShapeKind::Circle(b)) => assert_eq!(a.radius, b.radius),
            (ShapeKind::Path(a), ShapeKind::Path(b)) => {
                assert_eq!(a.commands().len(), b.commands().len());
                for (c, d) in a.commands().iter().zip(b.commands()) {
                    assert_eq!(c.letter, d.letter);
                    let (cx, cy) = c.coords();
                    let (dx, dy) = d.coords();
                    close(
                        Point::new(cx.unwrap_or(0.0), cy.unwrap_or(0.0)),
                        Point::new(dx.unwrap_or(0.0), dy.unwrap_or(0.0)),
                    );
                }
            }
            (ShapeKind::Group(a), ShapeKind::Group(b)) => {
                assert_eq!(a.len(), b.len());
                for (c, d) in a.children().iter().zip(b.children()) {
                    assert_close(c, d, tolerance);
                }
            }
            _ => panic!("{} vs {}", a.kind_name(), b.kind_name()),
        }
    }

    #[test]
    fn rotate_then_reverse_about_pivot_within_tolerance() {
        let pivot = pt(12.0, -4.0);
        for original in all_samples() {
            for degrees in [30.0, 45.0] {
                let mut shape = original.clone();
                shape.rotate(degrees, Some(pivot));
                shape.rotate(-degrees, Some(pivot));
                // rounded factors make non-quarter turns slightly lossy
                assert_close(&shape, &original, 0.2);
            }
        }
    }

    #[test]
    fn flip_twice_is_identity() {
        for original in all_samples() {
            let mut shape = original.clone();
            shape.flip_horizontal(Some(7.0));
            shape.flip_horizontal(Some(7.0));
            assert_eq!(shape, original, "{}", original.kind_name());

            shape.flip_vertical(Some(-2.0));
            shape.flip_vertical(Some(-2.0));
            assert_eq!(shape, original, "{}", original.kind_name());
        }
    }

    #[test]
    fn translate_round_trip_is_exact() {
        for original in all_samples() {
            let mut shape = original.clone();
            shape.translate(12.0, -7.5);
            assert_ne!(shape, original);
            shape.translate(-12.0, 7.5);
            assert_eq!(shape, original, "{}", original.kind_name());
        }
    }

    #[test]
    fn attach_center_lands_exactly() {
        for original in all_samples() {
            let mut shape = original.clone();
            shape.rotate(90.0, Some(pt(1.0, 1.0)));
            shape.flip_vertical(None);
            shape.attach_center(0.1, 0.7);
            assert_eq!(shape.center(), pt(0.1, 0.7), "{}", original.kind_name());
        }
    }

    #[test]
    fn attach_center_moves_geometry_with_center() {
        let mut line = sample_polyline();
        line.attach_center(13.0, 10.0);
        assert_eq!(
            line.points(),
            &[pt(10.0, 15.0), pt(10.0, 5.0), pt(16.0, 5.0), pt(16.0, 15.0)]
        );
    }

    #[test]
    fn circle_ignores_self_rotation_and_axisless_flips() {
        let original = Circle::new(pt(3.0, 5.0), 3.0);
        let mut circle = original.clone();
        circle.rotate(90.0, None);
        circle.flip_horizontal(None);
        circle.flip_vertical(None);
        assert_eq!(circle, original);

        circle.rotate(90.0, Some(pt(0.0, 0.0)));
        assert_eq!(circle.center(), pt(-5.0, 3.0));
        circle.flip_horizontal(Some(0.0));
        assert_eq!(circle.center(), pt(5.0, 3.0));
    }

    #[test]
    fn path_vertical_command_survives_half_turns() {
        let original = Path::new([
            PathCommand::move_to(0.0, 0.0),
            PathCommand::line_to(6.0, 6.0),
            PathCommand::vertical(0.0),
        ]);
        let mut path = original.clone();
        path.rotate(180.0, None);
        path.rotate(-180.0, None);
        assert_eq!(path, original);
    }

    #[test]
    fn path_vertical_command_stays_truncated() {
        let mut path = Path::new([PathCommand::move_to(0.0, 0.0), PathCommand::vertical(6.0)]);
        path.rotate(90.0, Some(pt(0.0, 0.0)));
        // (0, 6) rotates to (-6, 0); only the y survives
        assert_eq!(
            path.commands(),
            &[PathCommand::move_to(0.0, 0.0), PathCommand::vertical(0.0)]
        );

        let mut path = Path::new([PathCommand::move_to(1.0, 2.0), PathCommand::vertical(6.0)]);
        path.flip_horizontal(Some(4.0));
        path.flip_vertical(Some(4.0));
        path.translate(1.0, 1.0);
        assert_eq!(
            path.commands(),
            &[PathCommand::move_to(8.0, 7.0), PathCommand::vertical(3.0)]
        );
    }

    #[test]
    fn path_horizontal_command_keeps_previous_y() {
        let mut path = Path::new([PathCommand::move_to(0.0, 2.0), PathCommand::horizontal(4.0)]);
        path.rotate(180.0, Some(pt(0.0, 0.0)));
        assert_eq!(
            path.commands(),
            &[PathCommand::move_to(0.0, -2.0), PathCommand::horizontal(-4.0)]
        );
    }

    #[test]
    fn group_center_follows_transform_not_children() {
        let mut group = sample_group().with_center(pt(15.0, 15.0));
        group.rotate(90.0, Some(pt(0.0, 0.0)));
        assert_eq!(group.center(), rotate_point(pt(15.0, 15.0), pt(0.0, 0.0), 90.0));

        group.flip_horizontal(Some(2.0));
        assert_eq!(group.center(), pt(flip_coordinate(-15.0, 2.0), 15.0));
    }

    #[test]
    fn group_propagates_to_children() {
        let mut group = sample_group();
        group.translate(1.0, 2.0);
        let circle = &group.children()[1];
        assert_eq!(circle.center(), pt(4.0, 7.0));
    }

    #[test]
    fn push_keeps_group_center() {
        let mut group = sample_group();
        let before = group.center();
        group.push(Circle::new(pt(100.0, 100.0), 1.0));
        assert_eq!(group.center(), before);
        assert_eq!(group.len(), 4);
    }

    #[test]
    fn polyline_points_attr() {
        let mut line = sample_polyline();
        line.translate(0.5, 0.0);
        insta::assert_snapshot!(line.points_attr(), @"0.5,10 0.5,0 6.5,0 6.5,10");
    }

    #[test]
    fn path_data_attr() {
        insta::assert_snapshot!(sample_path().data_attr(), @"M 0,0 L 0,6 L 6,6 L 6,0 Z");
    }

    #[test]
    fn style_defaults_and_overrides() {
        let style = Style::default().set("stroke", "red").set("stroke-width", "2");
        assert_eq!(style.get("fill"), Some("none"));
        assert_eq!(style.get("stroke"), Some("red"));
        let keys: Vec<_> = style.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["fill", "stroke", "stroke-width"]);
    }

    #[test]
    fn empty_style_renders_bare_element() {
        let line = sample_polyline().with_style(Style::empty().set("stroke", "red"));
        let rendered = line.render().to_string();
        assert!(!rendered.contains("fill"), "{rendered}");
        assert!(rendered.contains(r#"stroke="red""#));
    }

    #[test]
    fn render_emits_style_attributes() {
        let rendered = Circle::new(pt(3.0, 5.0), 3.0).render().to_string();
        assert!(rendered.starts_with("<circle"));
        assert!(rendered.contains(r#"cx="3""#));
        assert!(rendered.contains(r#"r="3""#));
        assert!(rendered.contains(r#"fill="none""#));
        assert!(rendered.contains(r#"stroke="black""#));
    }

    #[test]
    fn group_renders_children_in_order() {
        let rendered = sample_group().render().to_string();
        let polyline = rendered.find("<polyline").unwrap();
        let circle = rendered.find("<circle").unwrap();
        let path = rendered.find("<path").unwrap();
        assert!(rendered.starts_with("<g"));
        assert!(polyline < circle && circle < path);
    }
}
