//! Inline assets of the HTML page.

pub const PAGE_TITLE: &str = "भगवद गीता - स्वामी रामसुखदास जी की व्याख्या";
pub const BOOK_TITLE: &str = "श्रीमद् भगवद्गीता";
pub const BOOK_SUBTITLE: &str = "स्वामी रामसुखदास जी की व्याख्या के साथ";
pub const FOOTER_TITLE: &str = "श्रीमद् भगवद्गीता - स्वामी रामसुखदास जी की व्याख्या";
pub const CHAPTER_LABEL: &str = "अध्याय";
pub const REVEAL_HINT: &str = "उत्तर देखने के लिए क्लिक करें";

pub const STYLE: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
        }

        .container {
            max-width: 900px;
            margin: 0 auto;
            background: white;
            border-radius: 15px;
            box-shadow: 0 10px 40px rgba(0,0,0,0.2);
            overflow: hidden;
        }

        .header {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            padding: 30px;
            text-align: center;
        }

        .header h1 { font-size: 2em; margin-bottom: 10px; }
        .header p { font-size: 1.1em; opacity: 0.9; }

        .chat-container {
            padding: 30px;
            background: #f5f5f5;
            min-height: 500px;
        }

        .chapter-header {
            text-align: center;
            margin: 30px 0 20px 0;
            padding: 15px;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            border-radius: 10px;
            font-size: 1.3em;
            font-weight: bold;
        }

        .message { margin: 15px 0; animation: fadeIn 0.3s ease-in; }

        @keyframes fadeIn {
            from { opacity: 0; transform: translateY(10px); }
            to { opacity: 1; transform: translateY(0); }
        }

        .message-content {
            display: inline-block;
            max-width: 75%;
            padding: 15px 20px;
            border-radius: 18px;
            line-height: 1.6;
            font-size: 1.05em;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }

        .verse-number {
            font-weight: bold;
            font-size: 0.9em;
            opacity: 0.7;
            margin-bottom: 5px;
            display: block;
        }

        .arjuna { text-align: left; }
        .arjuna .message-content {
            background: linear-gradient(135deg, #FF9966 0%, #FF5E62 100%);
            color: white;
            border-bottom-left-radius: 5px;
        }

        .bhagavan { text-align: right; }
        .bhagavan .message-content {
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            color: white;
            border-bottom-right-radius: 5px;
        }

        .narrator { text-align: center; }
        .narrator .message-content {
            background: linear-gradient(135deg, #bdc3c7 0%, #95a5a6 100%);
            color: white;
            border-radius: 18px;
            font-style: italic;
        }

        .other { text-align: left; }
        .other .message-content {
            background: #e8e8e8;
            color: #333;
            border-bottom-left-radius: 5px;
        }

        .concealed .message-content { cursor: pointer; }
        .concealed .hidden-text { display: none; }
        .revealed .reveal-hint { display: none; }
        .reveal-hint { font-style: italic; opacity: 0.8; }

        .footer {
            background: #333;
            color: white;
            padding: 20px;
            text-align: center;
            font-size: 0.9em;
        }

        .legend {
            background: white;
            padding: 20px;
            margin: 0 30px 20px 30px;
            border-radius: 10px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }

        .legend h3 { margin-bottom: 15px; color: #333; }
        .legend-item { display: inline-block; margin: 5px 15px 5px 0; font-size: 0.95em; }
        .legend-color {
            display: inline-block;
            width: 20px;
            height: 20px;
            border-radius: 50%;
            margin-right: 8px;
            vertical-align: middle;
        }

        .chapter-block .chapter-header { cursor: pointer; position: relative; user-select: none; }
        .chapter-header .triangle { font-weight: bold; margin-right: 8px; display: inline-block; width: 1em; }
        .chapter-block.collapsed .chapter-content { display: none; }
        .chapter-block.expanded .chapter-content { display: block; }
        .chapter-block { margin-bottom: 10px; border: 1px solid #ddd; border-radius: 10px; overflow: hidden; background: #ffffff; }
        .chapter-block .chapter-header { margin: 0; border-radius: 0; padding: 12px 16px; font-size: 1.1em; }
        .chapter-content { padding: 10px 25px 25px 25px; background: #f5f5f5; }
"#;

pub const LEGEND: &str = r#"        <div class="legend">
            <h3>संवाद सहभागी (Conversation Participants):</h3>
            <div class="legend-item">
                <span class="legend-color" style="background: linear-gradient(135deg, #FF9966 0%, #FF5E62 100%);"></span>
                अर्जुन (Arjuna)
            </div>
            <div class="legend-item">
                <span class="legend-color" style="background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);"></span>
                श्रीभगवान् (Lord Krishna)
            </div>
            <div class="legend-item">
                <span class="legend-color" style="background: linear-gradient(135deg, #bdc3c7 0%, #95a5a6 100%);"></span>
                सञ्जय / धृतराष्ट्र (Narrator)
            </div>
        </div>
"#;

/// Expand/collapse of chapter blocks; Ctrl+Shift+E expands all, Ctrl+Shift+C collapses all
pub const CHAPTER_SCRIPT: &str = r#"        function setChapterState(block, expanded){
            block.classList.toggle('collapsed', !expanded);
            block.classList.toggle('expanded', expanded);
            block.querySelector('.chapter-content').style.display = expanded ? 'block' : 'none';
            block.querySelector('.triangle').textContent = expanded ? '▼' : '►';
        }
        function toggleChapter(header){
            const block = header.parentElement;
            setChapterState(block, block.classList.contains('collapsed'));
        }
        document.addEventListener('keydown', function(e){
            if(!(e.ctrlKey && e.shiftKey)) return;
            const key = e.key.toLowerCase();
            if(key === 'e'){
                document.querySelectorAll('.chapter-block.collapsed').forEach(b => setChapterState(b, true));
            }
            if(key === 'c'){
                document.querySelectorAll('.chapter-block.expanded').forEach(b => setChapterState(b, false));
            }
        });
"#;

/// Click-to-reveal of concealed messages; Ctrl+Shift+R reveals all
pub const REVEAL_SCRIPT: &str = r#"        function revealMessage(content){
            const message = content.parentElement;
            const concealed = message.classList.contains('concealed');
            message.classList.toggle('concealed', !concealed);
            message.classList.toggle('revealed', concealed);
        }
        document.addEventListener('keydown', function(e){
            if(e.ctrlKey && e.shiftKey && e.key.toLowerCase() === 'r'){
                document.querySelectorAll('.message.concealed').forEach(m => {
                    m.classList.remove('concealed');
                    m.classList.add('revealed');
                });
            }
        });
"#;
