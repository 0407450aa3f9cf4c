//! Per-(type, operation) execution plans
//!
//! Common 256-bit hardware does not cover every (element width, operation)
//! pair: there is no byte-width or quadword vector multiply and no quadword
//! integer min/max. Rather than re-deriving those facts inline in every
//! kernel, the table lives here: each kernel asks [`plan_for`] once per call
//! (never per element) and structures its main loop accordingly. The
//! per-width facts themselves are associated consts on
//! [`Element`](crate::Element), so the lookup folds to a constant after
//! monomorphization.

use crate::element::Element;

/// The twelve operation kinds the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// Whole-array sum.
    ReduceAdd,
    /// Whole-array product.
    ReduceMul,
    /// Whole-array minimum.
    ReduceMin,
    /// Whole-array maximum.
    ReduceMax,
    /// `Σ a[i] * b[i]`, single pass.
    DotProduct,
    /// `Σ a[i]²`, single pass.
    SumOfSquares,
    /// `Σ |a[i] - b[i]|`, single pass.
    SumOfAbsDiff,
    /// `out[i] = c * x[i] + y[i]`.
    ScaledAdd,
    /// `out[i] = c * x[i]`.
    Scale,
    /// `out[i] = x[i] + c`.
    Offset,
    /// `out[i] = x[i] + y[i]`.
    ElementwiseAdd,
    /// `out[i] = max(lo, min(hi, x[i]))`.
    Clamp,
}

/// How a kernel's main loop is structured for a given (type, operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Full-width vector chunks; scalar loop only for the `n mod LANES` tail.
    FullVector,
    /// Vector chunks with one scalar sub-step per lane (the multiply inside
    /// a fold whose width has no native vector multiply); accumulation stays
    /// vectorized.
    VectorScalarMul,
    /// Unrolled scalar loop with independent accumulators for
    /// instruction-level parallelism; no vector machinery.
    FullScalar,
}

/// Look up the execution plan for `op` at element type `T`.
///
/// # Example
///
/// ```rust
/// use lanefold::{plan_for, OpKind, Plan};
///
/// // Byte-width multiplies have no native vector form.
/// assert_eq!(plan_for::<i8>(OpKind::DotProduct), Plan::VectorScalarMul);
/// assert_eq!(plan_for::<i8>(OpKind::ReduceMul), Plan::FullScalar);
/// // The same operations at 32-bit width are fully vectorized.
/// assert_eq!(plan_for::<i32>(OpKind::DotProduct), Plan::FullVector);
/// ```
#[inline]
pub fn plan_for<T: Element>(op: OpKind) -> Plan {
    match op {
        // Addition vectorizes at every width.
        OpKind::ReduceAdd | OpKind::Offset | OpKind::ElementwiseAdd | OpKind::SumOfAbsDiff => {
            Plan::FullVector
        }

        // A product fold combines *by* multiplying, so without a vector
        // multiply the whole fold is scalar; a dot product only multiplies
        // as a sub-step and can keep its sum accumulation vectorized.
        OpKind::ReduceMul => {
            if T::VECTOR_MUL {
                Plan::FullVector
            } else {
                Plan::FullScalar
            }
        }
        OpKind::DotProduct | OpKind::SumOfSquares => {
            if T::VECTOR_MUL {
                Plan::FullVector
            } else {
                Plan::VectorScalarMul
            }
        }

        // Maps have no accumulator to keep vectorized, so a missing vector
        // multiply sends the whole loop to the scalar plan.
        OpKind::ScaledAdd | OpKind::Scale => {
            if T::VECTOR_MUL {
                Plan::FullVector
            } else {
                Plan::FullScalar
            }
        }

        OpKind::ReduceMin | OpKind::ReduceMax | OpKind::Clamp => {
            if T::VECTOR_MINMAX {
                Plan::FullVector
            } else {
                Plan::FullScalar
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_multiply_falls_back() {
        assert_eq!(plan_for::<i8>(OpKind::ReduceMul), Plan::FullScalar);
        assert_eq!(plan_for::<u8>(OpKind::DotProduct), Plan::VectorScalarMul);
        assert_eq!(plan_for::<i8>(OpKind::ScaledAdd), Plan::FullScalar);
    }

    #[test]
    fn quadword_multiply_and_minmax_fall_back() {
        assert_eq!(plan_for::<i64>(OpKind::DotProduct), Plan::VectorScalarMul);
        assert_eq!(plan_for::<u64>(OpKind::ReduceMul), Plan::FullScalar);
        assert_eq!(plan_for::<i64>(OpKind::ReduceMin), Plan::FullScalar);
        assert_eq!(plan_for::<u64>(OpKind::Clamp), Plan::FullScalar);
    }

    #[test]
    fn addition_vectorizes_everywhere() {
        assert_eq!(plan_for::<i8>(OpKind::ReduceAdd), Plan::FullVector);
        assert_eq!(plan_for::<u64>(OpKind::ElementwiseAdd), Plan::FullVector);
        assert_eq!(plan_for::<i8>(OpKind::SumOfAbsDiff), Plan::FullVector);
        assert_eq!(plan_for::<f64>(OpKind::Offset), Plan::FullVector);
    }

    #[test]
    fn floats_are_fully_vectorized_for_every_op() {
        for op in [
            OpKind::ReduceAdd,
            OpKind::ReduceMul,
            OpKind::ReduceMin,
            OpKind::ReduceMax,
            OpKind::DotProduct,
            OpKind::SumOfSquares,
            OpKind::SumOfAbsDiff,
            OpKind::ScaledAdd,
            OpKind::Scale,
            OpKind::Offset,
            OpKind::ElementwiseAdd,
            OpKind::Clamp,
        ] {
            assert_eq!(plan_for::<f32>(op), Plan::FullVector);
            assert_eq!(plan_for::<f64>(op), Plan::FullVector);
        }
    }

    #[test]
    fn mid_width_integers_keep_the_vector_multiply() {
        assert_eq!(plan_for::<i16>(OpKind::ReduceMul), Plan::FullVector);
        assert_eq!(plan_for::<u32>(OpKind::SumOfSquares), Plan::FullVector);
        assert_eq!(plan_for::<i32>(OpKind::Scale), Plan::FullVector);
    }
}
