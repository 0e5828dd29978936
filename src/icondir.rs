use crate::error::EncodeError;
use crate::framespec::FrameSpec;
use byteorder::{LittleEndian, WriteBytesExt};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

//===========================================================================//

// The size of the ICONDIR header, in bytes.
pub(crate) const HEADER_LEN: u32 = 6;
// The size of one ICONDIRENTRY struct, in bytes.
pub(crate) const ENTRY_LEN: u32 = 16;

// The resource type number for icons (as opposed to 2 for cursors).
const ICON_RESOURCE_TYPE: u16 = 1;
// Every frame is an RGBA PNG; there is no palette and no plane count.
const BITS_PER_PIXEL: u16 = 32;
const NUM_COLORS: u8 = 0;
const COLOR_PLANES: u16 = 0;

//===========================================================================//

/// One resized and compressed frame, waiting to be laid out.
pub(crate) struct Frame {
    pub(crate) spec: FrameSpec,
    pub(crate) payload: Vec<u8>,
}

//===========================================================================//

/// The directory record describing one frame of an ICO file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DirectoryEntry {
    spec: FrameSpec,
    data_size: u32,
    data_offset: u32,
}

impl DirectoryEntry {
    /// Returns the width of the frame, in pixels.
    pub fn width(&self) -> u32 {
        self.spec.width()
    }

    /// Returns the height of the frame, in pixels.
    pub fn height(&self) -> u32 {
        self.spec.height()
    }

    /// Returns the size of the frame.
    pub fn spec(&self) -> FrameSpec {
        self.spec
    }

    /// Returns the width byte as stored in the file.
    pub fn width_byte(&self) -> u8 {
        self.spec.width() as u8
    }

    /// Returns the height byte as stored in the file.
    pub fn height_byte(&self) -> u8 {
        self.spec.height() as u8
    }

    /// Returns the number of palette colors, which is always zero.
    pub fn num_colors(&self) -> u8 {
        NUM_COLORS
    }

    /// Returns the color plane count, which is always zero.
    pub fn color_planes(&self) -> u16 {
        COLOR_PLANES
    }

    /// Returns the bits-per-pixel, which is always 32.
    pub fn bits_per_pixel(&self) -> u16 {
        BITS_PER_PIXEL
    }

    /// Returns the length of the frame's compressed image data, in bytes.
    pub fn data_size(&self) -> u32 {
        self.data_size
    }

    /// Returns the position of the frame's image data, in bytes from the
    /// start of the file.
    pub fn data_offset(&self) -> u32 {
        self.data_offset
    }

    fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u8(self.width_byte())?;
        writer.write_u8(self.height_byte())?;
        writer.write_u8(NUM_COLORS)?;
        writer.write_u8(0)?; // reserved
        writer.write_u16::<LittleEndian>(COLOR_PLANES)?;
        writer.write_u16::<LittleEndian>(BITS_PER_PIXEL)?;
        writer.write_u32::<LittleEndian>(self.data_size)?;
        writer.write_u32::<LittleEndian>(self.data_offset)?;
        Ok(())
    }
}

//===========================================================================//

/// Computes the directory for `frames`, placing their payloads back-to-back
/// in order, straight after the directory.  Returns the entries and the total
/// file length.
pub(crate) fn layout(
    frames: &[Frame],
) -> Result<(Vec<DirectoryEntry>, u32), EncodeError> {
    if frames.len() > (u16::MAX as usize) {
        return Err(EncodeError::TooManyFrames { count: frames.len() });
    }
    let directory_len = HEADER_LEN + ENTRY_LEN * (frames.len() as u32);
    let file_len = (directory_len as u64)
        + frames.iter().map(|frame| frame.payload.len() as u64).sum::<u64>();
    if file_len > (u32::MAX as u64) {
        return Err(EncodeError::ContainerTooLarge { size: file_len });
    }
    let mut data_offset = directory_len;
    let mut entries = Vec::with_capacity(frames.len());
    for frame in frames.iter() {
        let data_size = frame.payload.len() as u32;
        entries.push(DirectoryEntry {
            spec: frame.spec,
            data_size,
            data_offset,
        });
        data_offset += data_size;
    }
    Ok((entries, data_offset))
}

/// Writes the header, then the directory, then every payload, in that order.
/// `entries` must come from `layout(frames)`.
pub(crate) fn write_container<W: Write>(
    entries: &[DirectoryEntry],
    frames: &[Frame],
    mut writer: W,
) -> io::Result<()> {
    debug_assert_eq!(entries.len(), frames.len());
    writer.write_u16::<LittleEndian>(0)?; // reserved
    writer.write_u16::<LittleEndian>(ICON_RESOURCE_TYPE)?;
    writer.write_u16::<LittleEndian>(entries.len() as u16)?;
    for entry in entries.iter() {
        entry.write(&mut writer)?;
    }
    for frame in frames.iter() {
        writer.write_all(&frame.payload)?;
    }
    writer.flush()
}

//===========================================================================//

/// A complete ICO file held in memory.
#[derive(Clone, Debug)]
pub struct ContainerFile {
    entries: Vec<DirectoryEntry>,
    data: Vec<u8>,
}

impl ContainerFile {
    pub(crate) fn assemble(
        frames: Vec<Frame>,
    ) -> Result<ContainerFile, EncodeError> {
        let (entries, file_len) = layout(&frames)?;
        let mut data = Vec::with_capacity(file_len as usize);
        write_container(&entries, &frames, &mut data)?;
        debug_assert_eq!(data.len(), file_len as usize);
        Ok(ContainerFile { entries, data })
    }

    /// Returns the directory entries, in file order.
    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    /// Returns the compressed image data for entry `index`.
    pub fn payload(&self, index: usize) -> Option<&[u8]> {
        let entry = self.entries.get(index)?;
        let start = entry.data_offset() as usize;
        self.data.get(start..(start + entry.data_size() as usize))
    }

    /// Returns the bytes of the file.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the bytes of the file, consuming it.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Returns the length of the file, in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the file has no bytes, which never happens for an
    /// assembled file.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes the file out to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }

    /// Writes the file out to disk, replacing any existing file at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        fs::write(path, &self.data)
    }
}

//===========================================================================//


//===========================================================================//
