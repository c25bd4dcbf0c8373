use std::path::{Path, PathBuf};

use ndarray::{ArrayD, ArrayView3, Axis, Ix3, Ix4};
use ndarray_npy::{ReadNpyError, ReadableElement};

use crate::foundation::core::ObjectId;
use crate::foundation::error::{MaskVisError, MaskVisResult};
use crate::load::listing::list_files;

/// Binary masks for every object present in one frame.
///
/// Stored object-major, then row-major: `bits[(object * height + y) * width + x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskTensor {
    objects: usize,
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

/// Borrowed view of a single object's mask.
#[derive(Clone, Copy, Debug)]
pub struct ObjectMask<'a> {
    width: u32,
    height: u32,
    bits: &'a [bool],
}

impl MaskTensor {
    pub fn new(objects: usize, width: u32, height: u32, bits: Vec<bool>) -> MaskVisResult<Self> {
        let expected = objects
            .checked_mul(width as usize)
            .and_then(|n| n.checked_mul(height as usize))
            .ok_or_else(|| MaskVisError::mask("mask tensor size overflows usize"))?;
        if bits.len() != expected {
            return Err(MaskVisError::mask(format!(
                "mask tensor holds {} values, expected {objects}x{height}x{width}",
                bits.len()
            )));
        }
        Ok(Self {
            objects,
            width,
            height,
            bits,
        })
    }

    /// Build from a thresholded array shaped `[objects, channels, H, W]` or `[objects, H, W]`.
    ///
    /// For 4-D input only channel 0 is used.
    pub fn from_array(arr: ArrayD<bool>) -> MaskVisResult<Self> {
        match arr.ndim() {
            4 => {
                let arr = arr
                    .into_dimensionality::<Ix4>()
                    .map_err(|e| MaskVisError::mask(format!("reshape 4-D mask: {e}")))?;
                if arr.len_of(Axis(1)) == 0 {
                    return Err(MaskVisError::mask("mask tensor has an empty channel axis"));
                }
                Self::from_view(arr.index_axis(Axis(1), 0))
            }
            3 => {
                let arr = arr
                    .into_dimensionality::<Ix3>()
                    .map_err(|e| MaskVisError::mask(format!("reshape 3-D mask: {e}")))?;
                Self::from_view(arr.view())
            }
            n => Err(MaskVisError::mask(format!(
                "mask tensor must have 3 or 4 dimensions, got {n} (shape {:?})",
                arr.shape()
            ))),
        }
    }

    fn from_view(view: ArrayView3<'_, bool>) -> MaskVisResult<Self> {
        let (objects, height, width) = view.dim();
        let width = u32::try_from(width)
            .map_err(|_| MaskVisError::mask(format!("mask width {width} is too large")))?;
        let height = u32::try_from(height)
            .map_err(|_| MaskVisError::mask(format!("mask height {height} is too large")))?;
        let bits = view.iter().copied().collect();
        Self::new(objects, width, height, bits)
    }

    pub fn object_count(&self) -> usize {
        self.objects
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mask for `id`, or `None` when this frame holds fewer objects.
    pub fn object(&self, id: ObjectId) -> Option<ObjectMask<'_>> {
        if id.0 >= self.objects {
            return None;
        }
        let plane = self.width as usize * self.height as usize;
        let start = id.0 * plane;
        Some(ObjectMask {
            width: self.width,
            height: self.height,
            bits: &self.bits[start..start + plane],
        })
    }

    /// Present objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, ObjectMask<'_>)> + '_ {
        (0..self.objects).filter_map(|i| self.object(ObjectId(i)).map(|m| (ObjectId(i), m)))
    }
}

impl<'a> ObjectMask<'a> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Row-major mask values.
    pub fn bits(&self) -> &'a [bool] {
        self.bits
    }

    pub fn covered_pixels(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// Mask files in `dir`: every regular file whose name contains `npy`, sorted by name.
pub fn list_mask_files(dir: &Path) -> MaskVisResult<Vec<PathBuf>> {
    let mut out: Vec<PathBuf> = list_files(dir)?
        .into_iter()
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.contains("npy"))
        })
        .collect();
    out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(out)
}

/// Read one `.npy` mask tensor, thresholding every value at `> 0`.
///
/// Accepts bool, signed/unsigned integer, and float element types.
pub fn read_mask_tensor(path: &Path) -> MaskVisResult<MaskTensor> {
    let arr = if let Some(a) = read_thresholded::<f32>(path, |v| *v > 0.0)? {
        a
    } else if let Some(a) = read_thresholded::<f64>(path, |v| *v > 0.0)? {
        a
    } else if let Some(a) = read_thresholded::<bool>(path, |v| *v)? {
        a
    } else if let Some(a) = read_thresholded::<u8>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<i64>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<i32>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<u16>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<i16>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<u32>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<u64>(path, |v| *v > 0)? {
        a
    } else if let Some(a) = read_thresholded::<i8>(path, |v| *v > 0)? {
        a
    } else {
        return Err(MaskVisError::mask(format!(
            "unsupported element type in '{}'",
            path.display()
        )));
    };

    MaskTensor::from_array(arr).map_err(|e| {
        MaskVisError::Other(anyhow::Error::new(e).context(format!("load mask '{}'", path.display())))
    })
}

/// `Ok(None)` when the file's dtype is not `T`.
fn read_thresholded<T>(
    path: &Path,
    is_on: impl Fn(&T) -> bool,
) -> MaskVisResult<Option<ArrayD<bool>>>
where
    T: ReadableElement,
{
    match ndarray_npy::read_npy::<_, ArrayD<T>>(path) {
        Ok(arr) => Ok(Some(arr.map(is_on))),
        Err(ReadNpyError::WrongDescriptor(_)) => Ok(None),
        Err(e) => Err(MaskVisError::mask(format!(
            "failed to read '{}': {e}",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/load/masks.rs"]
mod tests;
