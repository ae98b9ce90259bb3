/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use netpbm_core::log::trace;
use netpbm_core::magic::PnmKind;

use crate::errors::PnmErrors;
use crate::image::PnmImage;

/// This encapsulates an image operation.
///
/// All operations that can be applied to a [`PnmImage`]
/// implement this trait.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn name(&self) -> &'static str;

    /// Execute the operation on the image, manipulating it in place
    ///
    /// This is called by [`execute`](Self::execute) once the kind
    /// of the image has been checked against
    /// [`supported_kinds`](Self::supported_kinds).
    ///
    /// # Errors
    /// Any operation error will be propagated to the caller
    fn execute_impl(&self, image: &mut PnmImage) -> Result<(), PnmErrors>;

    /// Image kinds this operation can be applied to
    fn supported_kinds(&self) -> &'static [PnmKind];

    /// Execute the operation on the image
    ///
    /// # Errors
    /// - [`PnmErrors::UnsupportedOperation`] if the image kind is not supported
    /// - Any error returned by the operation itself
    ///
    /// # Example
    /// ```
    /// use netpbm::filters::Invert;
    /// use netpbm::traits::OperationsTrait;
    /// use netpbm::PnmImage;
    ///
    /// let mut image = PnmImage::decode(b"P2\n2 1\n10\n0 4\n").unwrap();
    /// Invert::new().execute(&mut image).unwrap();
    ///
    /// assert_eq!(image.as_graymap().unwrap().get(1, 0), Some(6));
    /// ```
    fn execute(&self, image: &mut PnmImage) -> Result<(), PnmErrors> {
        let kind = image.kind();

        if !self.supported_kinds().contains(&kind) {
            return Err(PnmErrors::UnsupportedOperation(self.name(), kind));
        }
        trace!("Running {} on a {kind}", self.name());

        self.execute_impl(image)
    }
}
