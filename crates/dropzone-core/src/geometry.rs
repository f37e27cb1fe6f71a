use std::ops::Mul;

use crate::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy> Rect<T> {
    pub fn origin(&self) -> Pos<T> {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size<T> {
        Size::new(self.width, self.height)
    }
}

impl Rect<f32> {
    /// Rectangle anchored at the origin with the given size.
    pub fn from_size(size: Size<f32>) -> Self {
        Rect::new(0.0, 0.0, size.width, size.height)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Translate a point from the outer coordinate space into this rect's space.
    pub fn to_local(&self, point: Vec2) -> Vec2 {
        point - Vec2::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }

    pub fn cast<U: From<T>>(self) -> Size<U> {
        Size {
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl Size<f32> {
    /// True when either dimension is zero (or negative), e.g. mid layout transition.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos<T> {
    pub x: T,
    pub y: T,
}

impl<T> Pos<T> {
    pub fn new(x: T, y: T) -> Self {
        Pos { x, y }
    }
}

impl From<Pos<f32>> for Vec2 {
    fn from(pos: Pos<f32>) -> Self {
        Vec2::new(pos.x, pos.y)
    }
}
