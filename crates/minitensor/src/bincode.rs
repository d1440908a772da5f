use crate::Tensor;

impl bincode::enc::Encode for Tensor {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(self.shape(), encoder)?;
        bincode::Encode::encode(self.strides(), encoder)?;
        bincode::Encode::encode(self.as_slice(), encoder)?;
        Ok(())
    }
}

impl<C> bincode::de::Decode<C> for Tensor {
    fn decode<D: bincode::de::Decoder<Context = C>>(
        decoder: &mut D,
    ) -> Result<Self, bincode::error::DecodeError> {
        let shape: Vec<usize> = bincode::Decode::decode(decoder)?;
        let strides: Vec<usize> = bincode::Decode::decode(decoder)?;
        let data: Vec<f32> = bincode::Decode::decode(decoder)?;
        let tensor = Tensor::from_shape_vec(&shape, data)
            .map_err(|e| bincode::error::DecodeError::OtherString(e.to_string()))?;
        if tensor.strides() != strides.as_slice() {
            return Err(bincode::error::DecodeError::OtherString(format!(
                "strides {strides:?} are not row-major for shape {shape:?}"
            )));
        }
        Ok(tensor)
    }
}
