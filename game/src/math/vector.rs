pub trait VectorMath {
    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn dot(self, other: Self) -> f32;
    fn length_squared(self) -> f32;
    fn distance_squared(self, other: Self) -> f32;
}

impl VectorMath for [f32; 3] {
    #[inline]
    fn add(self, other: Self) -> Self {
        [self[0] + other[0], self[1] + other[1], self[2] + other[2]]
    }

    #[inline]
    fn sub(self, other: Self) -> Self {
        [self[0] - other[0], self[1] - other[1], self[2] - other[2]]
    }

    #[inline]
    fn dot(self, other: Self) -> f32 {
        self[0] * other[0] + self[1] * other[1] + self[2] * other[2]
    }

    #[inline]
    fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    fn distance_squared(self, other: Self) -> f32 {
        other.sub(self).length_squared()
    }
}
