use crate::Tensor;

use serde::ser::SerializeStruct;
use serde::Deserialize;

impl serde::Serialize for Tensor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Tensor", 3)?;
        state.serialize_field("data", self.as_slice())?;
        state.serialize_field("shape", self.shape())?;
        state.serialize_field("strides", self.strides())?;
        state.end()
    }
}

impl<'de> serde::Deserialize<'de> for Tensor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct TensorData {
            data: Vec<f32>,
            shape: Vec<usize>,
            strides: Vec<usize>,
        }

        let TensorData {
            data,
            shape,
            strides,
        } = TensorData::deserialize(deserializer)?;

        let tensor = Tensor::from_shape_vec(&shape, data)
            .map_err(serde::de::Error::custom)?;
        if tensor.strides() != strides.as_slice() {
            return Err(serde::de::Error::custom("Invalid strides"));
        }

        Ok(tensor)
    }
}
